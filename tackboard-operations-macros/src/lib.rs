//! Procedural macro for defining operations
//!
//! `#[operation(verb = "...", noun = "...", description = "...")]` implements
//! `tackboard_operations::Operation` for a struct, deriving one `ParamMeta`
//! per named field: the doc comment becomes the description, `Option<T>`
//! fields are optional, and `#[serde(alias = "...")]` names become aliases.

use proc_macro::TokenStream;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    parse_macro_input, Attribute, DeriveInput, Expr, Field, Ident, Lit, Meta, Token, Type,
};

/// Attribute macro for defining an operation
///
/// # Usage
///
/// ```ignore
/// #[operation(verb = "move", noun = "card", description = "Move a card")]
/// #[derive(Debug, Deserialize, Serialize)]
/// pub struct MoveCard {
///     /// Card to move
///     pub id: CardId,
///     /// Destination list
///     #[serde(alias = "to")]
///     pub list_id: ListId,
///     /// Zero-based slot in the destination list
///     pub position: Option<usize>,
/// }
/// ```
#[proc_macro_attribute]
pub fn operation(attr: TokenStream, item: TokenStream) -> TokenStream {
    let args = parse_macro_input!(attr as OperationArgs);
    let input = parse_macro_input!(item as DeriveInput);

    let param_metas = match field_metas(&input) {
        Ok(metas) => metas,
        Err(err) => return err.to_compile_error().into(),
    };

    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let OperationArgs {
        verb,
        noun,
        description,
    } = &args;
    let num_params = param_metas.len();

    let expanded = quote! {
        #input

        impl #impl_generics ::tackboard_operations::Operation for #name #ty_generics #where_clause {
            fn verb(&self) -> &'static str {
                #verb
            }

            fn noun(&self) -> &'static str {
                #noun
            }

            fn description(&self) -> &'static str {
                #description
            }

            fn parameters(&self) -> &'static [::tackboard_operations::ParamMeta] {
                static PARAMS: [::tackboard_operations::ParamMeta; #num_params] = [
                    #(#param_metas),*
                ];
                &PARAMS
            }
        }
    };

    TokenStream::from(expanded)
}

/// Arguments for the #[operation(...)] attribute
struct OperationArgs {
    verb: String,
    noun: String,
    description: String,
}

impl Parse for OperationArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut verb = None;
        let mut noun = None;
        let mut description = None;

        while !input.is_empty() {
            let ident: Ident = input.parse()?;
            input.parse::<Token![=]>()?;
            let value = match input.parse::<Lit>()? {
                Lit::Str(s) => s.value(),
                other => return Err(syn::Error::new_spanned(other, "expected string literal")),
            };

            let slot = match ident.to_string().as_str() {
                "verb" => &mut verb,
                "noun" => &mut noun,
                "description" => &mut description,
                other => {
                    return Err(syn::Error::new_spanned(
                        &ident,
                        format!("unknown operation attribute `{}`", other),
                    ))
                }
            };
            if slot.replace(value).is_some() {
                return Err(syn::Error::new_spanned(ident, "attribute given twice"));
            }

            if !input.is_empty() {
                input.parse::<Token![,]>()?;
            }
        }

        Ok(OperationArgs {
            verb: verb.ok_or_else(|| input.error("missing `verb`"))?,
            noun: noun.ok_or_else(|| input.error("missing `noun`"))?,
            description: description.ok_or_else(|| input.error("missing `description`"))?,
        })
    }
}

/// Collect ParamMeta constructors for every named field
fn field_metas(input: &DeriveInput) -> syn::Result<Vec<proc_macro2::TokenStream>> {
    let syn::Data::Struct(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "operation can only be applied to structs",
        ));
    };

    match &data.fields {
        syn::Fields::Named(fields) => fields.named.iter().map(param_meta).collect(),
        syn::Fields::Unit => Ok(Vec::new()),
        syn::Fields::Unnamed(fields) => Err(syn::Error::new_spanned(
            fields,
            "operation does not support tuple structs",
        )),
    }
}

/// Generate the ParamMeta expression for a field
fn param_meta(field: &Field) -> syn::Result<proc_macro2::TokenStream> {
    let Some(ident) = field.ident.as_ref() else {
        return Err(syn::Error::new_spanned(field, "expected a named field"));
    };
    let name = ident.to_string();
    let description = doc_comment(&field.attrs);
    let param_type = param_type(&field.ty);
    let aliases = serde_aliases(&field.attrs);
    let required = if is_option(&field.ty) || has_serde_default(&field.attrs) {
        quote! {}
    } else {
        quote! { .required() }
    };

    Ok(quote! {
        ::tackboard_operations::ParamMeta::new(#name)
            .description(#description)
            .param_type(#param_type)
            #required
            .aliases(&[#(#aliases),*])
    })
}

/// Join the `///` lines of a field into one description
fn doc_comment(attrs: &[Attribute]) -> String {
    attrs
        .iter()
        .filter(|attr| attr.path().is_ident("doc"))
        .filter_map(|attr| match &attr.meta {
            Meta::NameValue(nv) => match &nv.value {
                Expr::Lit(syn::ExprLit {
                    lit: Lit::Str(s), ..
                }) => Some(s.value().trim().to_string()),
                _ => None,
            },
            _ => None,
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Last path segment of a type, if it is a plain path
fn last_segment(ty: &Type) -> Option<&syn::PathSegment> {
    match ty {
        Type::Path(path) => path.path.segments.last(),
        _ => None,
    }
}

fn is_option(ty: &Type) -> bool {
    last_segment(ty).is_some_and(|segment| segment.ident == "Option")
}

/// Map a Rust field type onto a ParamType
///
/// Typed IDs (`CardId`, `BoardId`, ...) are integers on the wire.
fn param_type(ty: &Type) -> proc_macro2::TokenStream {
    let Some(segment) = last_segment(ty) else {
        return quote! { ::tackboard_operations::ParamType::String };
    };
    let ident = segment.ident.to_string();

    if ident == "Option" {
        if let syn::PathArguments::AngleBracketed(args) = &segment.arguments {
            if let Some(syn::GenericArgument::Type(inner)) = args.args.first() {
                return param_type(inner);
            }
        }
    }

    match ident.as_str() {
        "Vec" => quote! { ::tackboard_operations::ParamType::Array },
        "bool" => quote! { ::tackboard_operations::ParamType::Boolean },
        "f32" | "f64" => quote! { ::tackboard_operations::ParamType::Number },
        "NaiveDate" => quote! { ::tackboard_operations::ParamType::Date },
        "i32" | "i64" | "u32" | "u64" | "usize" | "isize" => {
            quote! { ::tackboard_operations::ParamType::Integer }
        }
        id if id.ends_with("Id") => quote! { ::tackboard_operations::ParamType::Integer },
        _ => quote! { ::tackboard_operations::ParamType::String },
    }
}

/// Visit every `key` / `key = value` item inside `#[serde(...)]` attributes
fn for_each_serde_item(attrs: &[Attribute], mut visit: impl FnMut(&str, Option<&Lit>)) {
    for attr in attrs.iter().filter(|a| a.path().is_ident("serde")) {
        let _ = attr.parse_nested_meta(|meta| {
            let key = meta
                .path
                .get_ident()
                .map(|i| i.to_string())
                .unwrap_or_default();
            if meta.input.peek(Token![=]) {
                meta.input.parse::<Token![=]>()?;
                let value: Expr = meta.input.parse()?;
                match value {
                    Expr::Lit(lit) => visit(&key, Some(&lit.lit)),
                    _ => visit(&key, None),
                }
            } else {
                visit(&key, None);
            }
            Ok(())
        });
    }
}

fn serde_aliases(attrs: &[Attribute]) -> Vec<String> {
    let mut aliases = Vec::new();
    for_each_serde_item(attrs, |key, value| {
        if let ("alias", Some(Lit::Str(s))) = (key, value) {
            aliases.push(s.value());
        }
    });
    aliases
}

fn has_serde_default(attrs: &[Attribute]) -> bool {
    let mut found = false;
    for_each_serde_item(attrs, |key, _| found |= key == "default");
    found
}
