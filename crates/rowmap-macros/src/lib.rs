extern crate proc_macro;

use proc_macro::TokenStream;

/// Derives `rowmap::Mapped` for a struct with named fields.
///
/// Field attributes:
///
/// * `#[column("label")]` reads the field from `label` instead of the field
///   name.
/// * `#[mapped(skip)]` never populates the field.
///
/// Type attributes:
///
/// * `#[mapped(constructor = path)]` builds the zero-valued instance with
///   `path()`, a `fn() -> Result<Self, E>` where `E: Display`. Without it,
///   every field starts at `Default::default()`.
#[proc_macro_derive(Mapped, attributes(column, mapped))]
pub fn derive_mapped(input: TokenStream) -> TokenStream {
    match rowmap_codegen::generate(input.into()) {
        Ok(output) => output.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
