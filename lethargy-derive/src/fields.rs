use crate::to_words;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{self, GenericArgument, Ident, PathArguments, Type};

enum Kind {
    Flag,
    Named { count: usize },
    Variadic,
}

struct Field {
    ident: Ident,
    names: Vec<String>, // The long name as words, then the short name if any.
    kind: Kind,
    ty: Type,
    required: bool,
}

impl Field {
    ///
    /// Tokens evaluating to `Result<Option, ValidationError>`.
    fn option(&self) -> syn::Result<TokenStream2> {
        let flag_ty = crate_path!(Flag);
        let explicit_ty = crate_path!(Explicit);
        let variadic_ty = crate_path!(Variadic);
        let transform_ty = crate_path!(Transform);

        let names = &self.names;
        let names = quote! { &[#(#names),*][..] };
        let required = self.required;

        Ok(match self.kind {
            Kind::Flag => quote! { #flag_ty::new(#names) },
            Kind::Named { count } => {
                let inner = self.value_ty(count)?;
                quote! {
                    #explicit_ty::new(#names, #count, #transform_ty::<#inner>::parse())
                        .map(|opt| opt.required(#required))
                }
            }
            Kind::Variadic => {
                let inner = wrapped(&self.ty, "Vec").ok_or_else(|| self.wrong_type("Vec<T>"))?;
                quote! { #variadic_ty::new(#names, #transform_ty::<#inner>::parse()) }
            }
        })
    }
    ///
    /// The type each value is parsed into, for a named argument.
    fn value_ty(&self, count: usize) -> syn::Result<&Type> {
        let ty = &self.ty;
        match (count, self.required) {
            (1, true) => Ok(ty),
            (1, false) => wrapped(ty, "Option").ok_or_else(|| self.wrong_type("Option<T>")),
            (_, true) => wrapped(ty, "Vec").ok_or_else(|| self.wrong_type("Vec<T>")),
            (_, false) => wrapped(ty, "Option")
                .and_then(|ty| wrapped(ty, "Vec"))
                .ok_or_else(|| self.wrong_type("Option<Vec<T>>")),
        }
    }
    fn wrong_type(&self, expected: &str) -> syn::Error {
        syn::Error::new_spanned(
            &self.ty,
            format!("`{}` must have a type of the form `{}`", self.ident, expected),
        )
    }
}

/// `T` from `Wrapper<T>`.
fn wrapped<'a>(ty: &'a Type, wrapper: &str) -> Option<&'a Type> {
    let path = match ty {
        Type::Path(path) => &path.path,
        _ => return None,
    };
    let last = path.segments.last()?;
    if last.ident != wrapper {
        return None;
    }
    match &last.arguments {
        PathArguments::AngleBracketed(args) => match args.args.first()? {
            GenericArgument::Type(inner) => Some(inner),
            _ => None,
        },
        _ => None,
    }
}

pub(super) struct Parser {
    fields: Vec<Field>,
}
impl Parser {
    ///
    /// Process the fields of the struct into the options they describe.
    pub fn collect(fields: syn::FieldsNamed) -> syn::Result<Self> {
        let short_reg = regex::Regex::new(r#"short\s*=\s*"([^"]*)""#).unwrap();
        let count_reg = regex::Regex::new(r#"count\s*=\s*(\d+)"#).unwrap();

        let mut collected = Vec::new();
        for syn::Field {
            ident, attrs, ty, ..
        } in fields.named
        {
            let ident = ident.expect("field has an identifier");

            let required = !attrs.iter().any(|a| a.path.is_ident("optional"));
            let variadic = attrs.iter().find(|a| a.path.is_ident("variadic"));
            let named = attrs.iter().find(|a| a.path.is_ident("named"));
            let flag = attrs.iter().find(|a| a.path.is_ident("flag"));

            let (kind, attr) = match (flag, named, variadic) {
                (Some(flag), None, None) => (Kind::Flag, flag),
                (None, None, Some(variadic)) => (Kind::Variadic, variadic),
                (None, Some(named), None) => {
                    let count = match count_reg.captures(&named.tokens.to_string()) {
                        Some(cap) => cap[1].parse::<usize>().unwrap_or(0),
                        None => 1,
                    };
                    if count < 1 {
                        return Err(syn::Error::new_spanned(
                            named,
                            "A named argument must take at least one value.",
                        ));
                    }
                    (Kind::Named { count }, named)
                }
                (None, None, None) => {
                    return Err(syn::Error::new_spanned(
                        &ident,
                        "Field needs one of `#[flag]`, `#[named]` or `#[variadic]`.",
                    ))
                }
                _ => {
                    return Err(syn::Error::new_spanned(
                        &ident,
                        "Only one of `#[flag]`, `#[named]` or `#[variadic]` is allowed.",
                    ))
                }
            };

            let mut names = vec![to_words(&ident)];
            if let Some(cap) = short_reg.captures(&attr.tokens.to_string()) {
                names.push(cap[1].to_string());
            }

            collected.push(Field {
                ident,
                names,
                kind,
                ty,
                required,
            });
        }

        // Surface type errors here, rather than from inside generated code.
        for field in &collected {
            field.option()?;
        }

        Ok(Self { fields: collected })
    }
    ///
    /// An expression rendering every option, separated by spaces.
    pub fn usage(&self) -> TokenStream2 {
        let renders = self.fields.iter().filter_map(|field| field.option().ok()).map(|opt| {
            quote! {
                #opt.map(|opt| opt.to_string()).unwrap_or_default()
            }
        });
        quote! {
            let parts: Vec<String> = vec![#(#renders),*];
            parts.join(" ")
        }
    }
    ///
    /// Statements taking each field from `args`, then the constructor.
    pub fn into_body(self, args: &Ident) -> TokenStream2 {
        let take_fn = crate_path!(take);
        let missing_ty = crate_path!(MissingOption);

        let mut body = quote! {};
        let mut ctor = quote! {};
        for field in &self.fields {
            let ident = &field.ident;
            let option = match field.option() {
                Ok(option) => option,
                Err(e) => return e.to_compile_error(),
            };
            let finish = match field.kind {
                Kind::Flag | Kind::Variadic => quote! {},
                Kind::Named { count: 1 } if field.required => quote! {
                    .into_one().ok_or_else(|| #missing_ty::of(&opt))?
                },
                Kind::Named { count: 1 } => quote! { .into_one() },
                Kind::Named { .. } if field.required => quote! {
                    .into_vec().ok_or_else(|| #missing_ty::of(&opt))?
                },
                Kind::Named { .. } => quote! { .into_vec() },
            };
            body = quote! {
                #body
                let #ident = {
                    let opt = #option?;
                    #take_fn(&opt, #args, true)? #finish
                };
            };
            ctor = quote! {
                #ctor
                #ident ,
            };
        }

        quote! {
            #body
            Ok(Self { #ctor })
        }
    }
}
