use super::Expand;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_descriptor_body(&self) -> TokenStream {
        let rowmap = &self.rowmap;
        let model_ident = &self.model.ident;
        let name = &self.model.name;
        let fields = self.expand_field_descriptors();

        quote! {
            static DESCRIPTOR: #rowmap::OnceLock<#rowmap::TypeDescriptor<#model_ident>> =
                #rowmap::OnceLock::new();

            DESCRIPTOR.get_or_init(|| {
                #rowmap::TypeDescriptor::new(#name, #rowmap::Vec::from([ #( #fields, )* ]))
            })
        }
    }

    fn expand_field_descriptors(&self) -> Vec<TokenStream> {
        let rowmap = &self.rowmap;
        let model_ident = &self.model.ident;

        self.model
            .mapped_fields()
            .map(|field| {
                let ident = &field.ident;
                let name = &field.name;
                let ty = &field.ty;

                let column = field.attrs.column.as_ref().map(|column| {
                    let lit = &column.name;
                    quote!(.column(#lit))
                });

                quote! {
                    #rowmap::FieldDescriptor::new::<#ty>(
                        #name,
                        |target: &mut #model_ident, value: #ty| target.#ident = value,
                    )
                    #column
                }
            })
            .collect()
    }
}
