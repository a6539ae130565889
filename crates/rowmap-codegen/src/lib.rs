mod expand;
mod schema;

use proc_macro2::TokenStream;

/// Expands `#[derive(Mapped)]` on the given item.
pub fn generate(input: TokenStream) -> syn::Result<TokenStream> {
    let item: syn::DeriveInput = syn::parse2(input)?;
    let model = schema::Model::from_ast(&item)?;

    Ok(expand::model(&model))
}
