use super::{ErrorSet, Field, ModelAttr};

#[derive(Debug)]
pub(crate) struct Model {
    /// Type identifier
    pub(crate) ident: syn::Ident,

    /// Type name, as reported in descriptors and errors
    pub(crate) name: String,

    /// Type-level attributes
    pub(crate) attrs: ModelAttr,

    /// All named fields, including skipped ones
    pub(crate) fields: Vec<Field>,
}

impl Model {
    pub(crate) fn from_ast(ast: &syn::DeriveInput) -> syn::Result<Self> {
        let syn::Data::Struct(data) = &ast.data else {
            return Err(syn::Error::new_spanned(
                &ast.ident,
                "`Mapped` can only be derived for structs",
            ));
        };

        // Generics are not supported yet
        if !ast.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &ast.generics,
                "mapped type generics are not supported",
            ));
        }

        let syn::Fields::Named(node) = &data.fields else {
            return Err(syn::Error::new_spanned(&data.fields, "mapped fields must be named"));
        };

        let mut errs = ErrorSet::new();
        let mut attrs = ModelAttr::default();

        for attr in &ast.attrs {
            if attr.path().is_ident("mapped") {
                if let Err(err) = attrs.populate_from_ast(attr) {
                    errs.push(err);
                }
            }
        }

        let mut fields = vec![];

        for field in node.named.iter() {
            match Field::from_ast(field) {
                Ok(field) => fields.push(field),
                Err(err) => errs.push(err),
            }
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        Ok(Model {
            ident: ast.ident.clone(),
            name: ast.ident.to_string(),
            attrs,
            fields,
        })
    }

    /// Fields that receive column values.
    pub(crate) fn mapped_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|field| !field.attrs.skip)
    }
}
