#[derive(Debug, Default)]
pub(crate) struct ModelAttr {
    /// Function building the zero-valued instance: `#[mapped(constructor = path)]`
    pub(crate) constructor: Option<syn::Path>,
}

impl ModelAttr {
    pub(super) fn populate_from_ast(&mut self, attr: &syn::Attribute) -> syn::Result<()> {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("constructor") {
                if self.constructor.is_some() {
                    return Err(meta.error("duplicate constructor"));
                }
                self.constructor = Some(meta.value()?.parse()?);
                Ok(())
            } else {
                Err(meta.error("unsupported type option"))
            }
        })
    }
}
