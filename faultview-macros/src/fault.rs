use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    parse_macro_input, Attribute, DeriveInput, LitStr, Token,
};

#[derive(Default)]
struct FaultArgs {
    code: Option<String>,
    ancestors: Vec<String>,
}

impl Parse for FaultArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut code = None;
        let mut ancestors = Vec::new();

        while !input.is_empty() {
            let name: syn::Ident = input.parse()?;
            if name == "code" {
                input.parse::<Token![=]>()?;
                let lit: LitStr = input.parse()?;
                code = Some(lit.value());
            } else if name == "ancestors" {
                let content;
                syn::parenthesized!(content in input);
                while !content.is_empty() {
                    let lit: LitStr = content.parse()?;
                    ancestors.push(lit.value());
                    if content.peek(Token![,]) {
                        content.parse::<Token![,]>()?;
                    }
                }
            } else {
                return Err(syn::Error::new(
                    name.span(),
                    "expected `code = \"...\"` or `ancestors(\"...\")`",
                ));
            }
            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        Ok(FaultArgs { code, ancestors })
    }
}

pub fn derive_fault(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let expanded = match generate_fault_impl(&input) {
        Ok(tokens) => tokens,
        Err(err) => err.to_compile_error(),
    };
    TokenStream::from(expanded)
}

fn generate_fault_impl(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let args = parse_fault_args(&input.attrs)?;

    let type_name = name.to_string();
    let ancestors = if args.ancestors.is_empty() {
        vec!["Error".to_string()]
    } else {
        args.ancestors
    };

    let code_impl = match &args.code {
        Some(code) => quote! {
            fn code(&self) -> Option<&str> {
                Some(#code)
            }
        },
        None => quote! {},
    };

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::faultview::Fault for #name #ty_generics #where_clause {
            fn type_name(&self) -> &str {
                #type_name
            }

            fn ancestors(&self) -> &[&str] {
                &[#(#ancestors),*]
            }

            #code_impl
        }
    })
}

fn parse_fault_args(attrs: &[Attribute]) -> syn::Result<FaultArgs> {
    for attr in attrs {
        if attr.path().is_ident("fault") {
            return attr.parse_args::<FaultArgs>();
        }
    }
    Ok(FaultArgs::default())
}
