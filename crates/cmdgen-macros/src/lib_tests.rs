#![allow(non_snake_case)]

use super::*;
use proc_macro2::Span;

fn ident(name: &str) -> syn::Ident {
    syn::Ident::new(name, Span::call_site())
}

// command_name_for tests

#[test]
fn command_name_for___pascal_case___normalizes() {
    assert_eq!(
        command_name_for(&ident("CreateUserRequest")).unwrap(),
        "create_user_request"
    );
}

#[test]
fn command_name_for___acronym___keeps_run_together() {
    assert_eq!(command_name_for(&ident("UserID")).unwrap(), "user_id");
}

#[test]
fn command_name_for___single_word___lowercases() {
    assert_eq!(command_name_for(&ident("Ping")).unwrap(), "ping");
}

#[test]
fn command_name_for___underscore___returns_error() {
    let err = command_name_for(&ident("Legacy_Command")).unwrap_err();

    assert!(err.to_string().contains("cannot derive Command"));
}

// expand tests

#[test]
fn expand___named_struct___bakes_literal_name() {
    let input: DeriveInput = syn::parse_quote! {
        struct ExampleCommand {
            some_message: String,
        }
    };
    let opts = CommandOpts::from_derive_input(&input).unwrap();

    let tokens = expand(opts).unwrap().to_string();

    assert!(tokens.contains(":: cmdgen :: Command for ExampleCommand"));
    assert!(tokens.contains("\"example_command\""));
}

#[test]
fn expand___crate_override___uses_given_path() {
    let input: DeriveInput = syn::parse_quote! {
        #[command(crate = "cmdgen_core")]
        struct ExampleCommand {}
    };
    let opts = CommandOpts::from_derive_input(&input).unwrap();

    let tokens = expand(opts).unwrap().to_string();

    assert!(tokens.contains("cmdgen_core :: Command for ExampleCommand"));
}

#[test]
fn from_derive_input___tuple_struct___is_rejected() {
    let input: DeriveInput = syn::parse_quote! {
        struct Wrapper(u32);
    };

    assert!(CommandOpts::from_derive_input(&input).is_err());
}

// check_serde_names tests

#[test]
fn check_serde_names___lowercase_renames___are_accepted() {
    let input: DeriveInput = syn::parse_quote! {
        #[serde(default, rename_all = "snake_case")]
        struct ExampleCommand {
            #[serde(rename = "message", skip_serializing_if = "Option::is_none")]
            some_message: Option<String>,
            #[serde(default)]
            count: i64,
        }
    };

    assert!(check_serde_names(&input).is_ok());
}

#[test]
fn check_serde_names___mixed_case_field_rename___is_rejected() {
    let input: DeriveInput = syn::parse_quote! {
        struct ExampleCommand {
            #[serde(rename = "someMessage")]
            some_message: String,
        }
    };

    let err = check_serde_names(&input).unwrap_err();

    assert!(err.to_string().contains("\"someMessage\" is not lowercase"));
}

#[test]
fn check_serde_names___nested_deserialize_rename___is_rejected() {
    let input: DeriveInput = syn::parse_quote! {
        struct ExampleCommand {
            #[serde(rename(deserialize = "Count"))]
            count: i64,
        }
    };

    assert!(check_serde_names(&input).is_err());
}

#[test]
fn check_serde_names___camel_case_rename_all___is_rejected() {
    let input: DeriveInput = syn::parse_quote! {
        #[serde(rename_all = "camelCase")]
        struct ExampleCommand {
            some_message: String,
        }
    };

    let err = check_serde_names(&input).unwrap_err();

    assert!(err.to_string().contains("rename_all = \"camelCase\""));
}
