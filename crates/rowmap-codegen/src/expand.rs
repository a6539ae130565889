mod descriptor;
mod instantiate;

use crate::schema::Model;

use proc_macro2::TokenStream;
use quote::quote;

struct Expand<'a> {
    /// The type being expanded
    model: &'a Model,

    /// Path prefix for rowmap types
    rowmap: TokenStream,
}

impl Expand<'_> {
    fn expand(&self) -> TokenStream {
        let rowmap = &self.rowmap;
        let model_ident = &self.model.ident;
        let instantiate_body = self.expand_instantiate_body();
        let descriptor_body = self.expand_descriptor_body();

        wrap_in_const(quote! {
            impl #rowmap::Mapped for #model_ident {
                fn instantiate() -> #rowmap::Result<Self> {
                    #instantiate_body
                }

                fn descriptor() -> &'static #rowmap::TypeDescriptor<Self> {
                    #descriptor_body
                }
            }
        })
    }
}

pub(super) fn model(model: &Model) -> TokenStream {
    Expand {
        model,
        rowmap: quote!(_rowmap::codegen_support),
    }
    .expand()
}

fn wrap_in_const(code: TokenStream) -> TokenStream {
    quote! {
        const _: () = {
            use rowmap as _rowmap;
            #code
        };
    }
}
