use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::{self, Item};

macro_rules! crate_path {
    ($typ: tt) => {{
        let crate_name = proc_macro_crate::crate_name("lethargy")
            .expect("`lethargy` is present in `Cargo.toml`");
        let crate_name = quote::format_ident!("{}", crate_name);
        quote::quote! { ::#crate_name::$typ }
    }};
    () => {{
        let crate_name = proc_macro_crate::crate_name("lethargy")
            .expect("`lethargy` is present in `Cargo.toml`");
        let crate_name = quote::format_ident!("{}", crate_name);
        quote::quote! { ::#crate_name }
    }};
}

mod fields;

#[proc_macro_derive(Options, attributes(flag, named, optional, variadic))]
pub fn options(item: TokenStream) -> TokenStream {
    let options_ty = crate_path!(Options);
    let err_ty = crate_path!(Error);

    let input: Item = syn::parse(item).expect("failed to parse");

    let args_ident = format_ident!("__args");

    let (ident, fields) = match input {
        Item::Struct(syn::ItemStruct {
            ident,
            fields: syn::Fields::Named(fields),
            ..
        }) => (ident, fields),
        _ => panic!("Only allowed on structs with named fields."),
    };

    let parser = match fields::Parser::collect(fields) {
        Ok(parser) => parser,
        Err(e) => return e.to_compile_error().into(),
    };
    let usage = parser.usage();
    let body = parser.into_body(&args_ident);

    let ret = quote! {
        impl #options_ty for #ident {
            fn take_from(#args_ident: &mut Vec<String>) -> Result<Self, #err_ty> {
                #body
            }
            fn usage() -> String {
                #usage
            }
        }
    };
    ret.into()
}

/// `time_out` -> `time out`, which the library normalizes into `--time-out`.
fn to_words(ident: &impl ToString) -> String {
    ident
        .to_string()
        .trim_start_matches("r#")
        .split('_')
        .filter(|w| !w.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    #[test]
    fn words() {
        assert_eq!(super::to_words(&"verbose"), "verbose");
        assert_eq!(super::to_words(&"time_out"), "time out");
        assert_eq!(super::to_words(&"r#type"), "type");
        assert_eq!(super::to_words(&"_private_thing"), "private thing");
    }
}
