use super::Expand;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_instantiate_body(&self) -> TokenStream {
        let rowmap = &self.rowmap;
        let name = &self.model.name;

        if let Some(constructor) = &self.model.attrs.constructor {
            return quote! {
                #constructor().map_err(|err| #rowmap::Error::instantiation(#name, err))
            };
        }

        let field_idents = self.model.fields.iter().map(|field| &field.ident);

        quote! {
            Ok(Self {
                #( #field_idents: #rowmap::Default::default(), )*
            })
        }
    }
}
