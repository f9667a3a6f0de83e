//! WASM bindings for the dentml compiler.
//!
//! Exposes `compile()` and friends to JavaScript via wasm-bindgen.
//! Errors are thrown as JS errors carrying the lexer or syntax message.

use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Result shape returned by [`compile_detailed`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompileOutput {
    pub markup: String,
    pub fragments: Vec<String>,
}

/// Compile dentml source to a markup string.
#[wasm_bindgen]
pub fn compile(source: &str, pretty: bool) -> Result<String, JsError> {
    dentml_render::compile_to_string(source, pretty).map_err(|e| JsError::new(&e.to_string()))
}

/// Compile dentml source to an array of fragment strings.
#[wasm_bindgen]
pub fn compile_fragments(source: &str, pretty: bool) -> Result<js_sys::Array, JsError> {
    let render =
        dentml_render::compile(source, pretty).map_err(|e| JsError::new(&e.to_string()))?;

    let array = js_sys::Array::new();
    for fragment in render {
        array.push(&JsValue::from_str(&fragment));
    }
    Ok(array)
}

/// Compile dentml source to `{ markup: string, fragments: string[] }`.
#[wasm_bindgen]
pub fn compile_detailed(source: &str, pretty: bool) -> Result<JsValue, JsError> {
    let output = native_compile(source, pretty).map_err(|e| JsError::new(&e.to_string()))?;
    serde_wasm_bindgen::to_value(&output).map_err(|e| JsError::new(&e.to_string()))
}

/// Get the compiler version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn native_compile(source: &str, pretty: bool) -> Result<CompileOutput, dentml_render::Error> {
    let fragments: Vec<String> = dentml_render::compile(source, pretty)?.collect();
    Ok(CompileOutput {
        markup: fragments.concat(),
        fragments,
    })
}
