//! Browser bindings
//!
//! Exposes the cat model to the page script with the same surface the page
//! already expects: `Cat.generateRandom()`, `new Cat(dna, parents, id)`,
//! `cat.mate(other)` and the `dna` / `id` / `parents` / `isKitten` getters.

use crate::cat::{Cat, CatId, CatOptions, Dna, Parentage};
use crate::error::CatError;
use crate::portrait;
use js_sys::Array;
use wasm_bindgen::prelude::*;

fn to_js_error(err: CatError) -> JsValue {
    web_sys::console::warn_1(&JsValue::from_str(&err.to_string()));
    JsValue::from_str(&err.to_string())
}

#[wasm_bindgen(js_name = Cat)]
pub struct JsCat {
    inner: Cat,
}

#[wasm_bindgen(js_class = Cat)]
impl JsCat {
    /// Throws when `dna` is not 32 letters `A-Z` or `parents` is not empty or a pair
    #[wasm_bindgen(constructor)]
    pub fn new(dna: String, parents: Option<Array>, id: Option<f64>) -> Result<JsCat, JsValue> {
        let parents = match parents {
            None => None,
            Some(list) if list.length() == 0 => None,
            Some(list) if list.length() == 2 => {
                let parse = |v: JsValue| -> Result<Dna, JsValue> {
                    let s = v
                        .as_string()
                        .ok_or_else(|| JsValue::from_str("parent DNA must be a string"))?;
                    Dna::parse(s).map_err(to_js_error)
                };
                Some(Parentage::new(parse(list.get(0))?, parse(list.get(1))?))
            }
            Some(_) => return Err(JsValue::from_str("parents must be empty or a pair")),
        };
        let id = id.map(CatId::from_js_number).transpose().map_err(to_js_error)?;
        let options = CatOptions { parents, id };
        let inner = Cat::with_options(dna, options).map_err(to_js_error)?;
        Ok(JsCat { inner })
    }

    #[wasm_bindgen(js_name = generateRandom)]
    pub fn generate_random() -> JsCat {
        JsCat {
            inner: Cat::generate_random(),
        }
    }

    pub fn mate(&self, other: &JsCat) -> Result<JsCat, JsValue> {
        let inner = self.inner.mate(&other.inner).map_err(to_js_error)?;
        Ok(JsCat { inner })
    }

    #[wasm_bindgen(getter)]
    pub fn dna(&self) -> String {
        self.inner.dna().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn id(&self) -> Option<f64> {
        self.inner.id().map(|id| id.0 as f64)
    }

    #[wasm_bindgen(getter)]
    pub fn parents(&self) -> Array {
        self.inner
            .parents()
            .map(|p| p.iter().map(|d| JsValue::from_str(d.as_str())).collect())
            .unwrap_or_else(Array::new)
    }

    #[wasm_bindgen(getter, js_name = isKitten)]
    pub fn is_kitten(&self) -> bool {
        self.inner.is_kitten()
    }
}

/// Portrait URL for `dna`; throws when `dna` is not 32 letters `A-Z`
#[wasm_bindgen(js_name = portraitUrl)]
pub fn portrait_url(dna: String) -> Result<String, JsValue> {
    let dna = Dna::parse(dna).map_err(to_js_error)?;
    Ok(portrait::portrait_url(&dna))
}
