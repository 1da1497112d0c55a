//! cmdgen-macros - Procedural macros for cmdgen commands
//!
//! This crate provides:
//! - `#[derive(Command)]` - Implement `cmdgen::Command` with a normalized name
//!   computed at compile time

use darling::FromDeriveInput;
use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, parse_macro_input};

/// `rename_all` rules whose output never contains uppercase letters
const LOWERCASE_RENAME_RULES: &[&str] = &["lowercase", "snake_case", "kebab-case"];

/// Options for the Command derive macro
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(command), supports(struct_named))]
struct CommandOpts {
    ident: syn::Ident,
    generics: syn::Generics,

    /// Path to the crate providing the `Command` trait (default: `::cmdgen`)
    #[darling(default, rename = "crate")]
    krate: Option<syn::Path>,
}

/// Derive macro for command types
///
/// Implements `Command` with `COMMAND_NAME` set to the normalized type name
/// (e.g., `CreateUserRequest` -> `"create_user_request"`). The name is
/// computed here, so no runtime introspection is involved.
///
/// Decoding matches keys case-insensitively by lowercasing them, so serde
/// names must be lowercase: a `#[serde(rename = "...")]` containing uppercase
/// letters, or a `rename_all` rule other than `lowercase`, `snake_case` or
/// `kebab-case`, is a compile error.
///
/// # Example
///
/// ```ignore
/// #[derive(Debug, Default, Serialize, Deserialize, Command)]
/// #[serde(default)]
/// struct ExampleCommand {
///     pub some_message: String,
///     pub could_be_nothing: Option<String>,
/// }
///
/// assert_eq!(ExampleCommand::COMMAND_NAME, "example_command");
/// ```
#[proc_macro_derive(Command, attributes(command))]
pub fn derive_command(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let opts = match CommandOpts::from_derive_input(&input) {
        Ok(opts) => opts,
        Err(e) => return TokenStream::from(e.write_errors()),
    };

    if let Err(e) = check_serde_names(&input) {
        return e.to_compile_error().into();
    }

    expand(opts).unwrap_or_else(|e| e.to_compile_error()).into()
}

fn expand(opts: CommandOpts) -> syn::Result<proc_macro2::TokenStream> {
    let name = &opts.ident;
    let (impl_generics, ty_generics, where_clause) = opts.generics.split_for_impl();

    let command_name = command_name_for(name)?;
    let krate = opts
        .krate
        .unwrap_or_else(|| syn::parse_quote!(::cmdgen));

    Ok(quote! {
        impl #impl_generics #krate::Command for #name #ty_generics #where_clause {
            const COMMAND_NAME: &'static str = #command_name;
        }
    })
}

/// Normalize a type identifier, reporting failures at the identifier's span
fn command_name_for(ident: &syn::Ident) -> syn::Result<String> {
    let raw = ident.to_string();
    let raw = raw.strip_prefix("r#").unwrap_or(&raw);

    cmdgen_core::naming::normalize(raw)
        .map_err(|e| syn::Error::new(ident.span(), format!("cannot derive Command: {e}")))
}

/// Reject serde names that the case-folding decoder could never match
fn check_serde_names(input: &DeriveInput) -> syn::Result<()> {
    let mut errors: Vec<syn::Error> = Vec::new();

    for (key, lit) in input.attrs.iter().flat_map(string_settings) {
        if key == "rename_all" && !LOWERCASE_RENAME_RULES.contains(&lit.value().as_str()) {
            errors.push(syn::Error::new(
                lit.span(),
                format!(
                    "cannot derive Command: rename_all = {:?} produces keys that are not lowercase",
                    lit.value()
                ),
            ));
        }
    }

    if let syn::Data::Struct(data) = &input.data {
        let field_attrs = data.fields.iter().flat_map(|field| field.attrs.iter());
        for (key, lit) in field_attrs.flat_map(string_settings) {
            let name = lit.value();
            if key == "rename" && name != name.to_lowercase() {
                errors.push(syn::Error::new(
                    lit.span(),
                    format!("cannot derive Command: serde name {name:?} is not lowercase"),
                ));
            }
        }
    }

    match errors.into_iter().reduce(|mut first, next| {
        first.combine(next);
        first
    }) {
        Some(error) => Err(error),
        None => Ok(()),
    }
}

/// `key = "value"` pairs of a `#[serde(...)]` attribute. Pairs nested one
/// level deep (`rename(deserialize = "...")`) report the outer key.
fn string_settings(attr: &syn::Attribute) -> Vec<(String, syn::LitStr)> {
    let mut settings = Vec::new();
    if !attr.path().is_ident("serde") {
        return settings;
    }

    // serde reports malformed attributes itself
    let _ = attr.parse_nested_meta(|meta| {
        let key = meta
            .path
            .get_ident()
            .map(ToString::to_string)
            .unwrap_or_default();

        if meta.input.peek(syn::Token![=]) {
            if let Some(lit) = string_value(&meta)? {
                settings.push((key, lit));
            }
        } else if meta.input.peek(syn::token::Paren) {
            meta.parse_nested_meta(|inner| {
                if inner.input.peek(syn::Token![=]) {
                    if let Some(lit) = string_value(&inner)? {
                        settings.push((key.clone(), lit));
                    }
                }
                Ok(())
            })?;
        }
        Ok(())
    });

    settings
}

fn string_value(meta: &syn::meta::ParseNestedMeta<'_>) -> syn::Result<Option<syn::LitStr>> {
    let value: syn::Expr = meta.value()?.parse()?;
    Ok(match value {
        syn::Expr::Lit(syn::ExprLit {
            lit: syn::Lit::Str(lit),
            ..
        }) => Some(lit),
        _ => None,
    })
}

#[cfg(test)]
mod lib_tests;
