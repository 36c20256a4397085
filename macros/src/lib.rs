use proc_macro::TokenStream;
use quote::quote;

/// Generate a three component color model from a plain struct definition.
///
/// The struct gets value semantics (`Clone`, `Copy`, `Debug`, `Default`,
/// `PartialEq`, `Eq`, `Hash`), public fields, a `const fn new` taking the
/// components in declaration order, and conversions to and from a tuple of
/// the component types.
#[proc_macro]
pub fn gen_model(input: TokenStream) -> TokenStream {
    let mut input = syn::parse_macro_input!(input as syn::ItemStruct);

    if input.fields.len() != 3 {
        return quote! {
            compile_error!("Models must have exactly 3 fields, one for each component of the color.");
        }
        .into();
    }

    if !input.generics.params.is_empty() {
        return quote! {
            compile_error!("Models can not be generic.");
        }
        .into();
    }

    let syn::Fields::Named(ref mut named) = input.fields else {
        return quote! {
            compile_error!("Models must use named fields.");
        }
        .into();
    };

    // Make sure the 3 specified fields are public.
    named.named.iter_mut().for_each(|f| {
        f.vis = syn::Visibility::Public(Default::default());
    });

    let (names, types): (Vec<_>, Vec<_>) = named
        .named
        .iter()
        .map(|f| (f.ident.clone(), f.ty.clone()))
        .unzip();
    debug_assert!(names.len() == 3);

    let (field1, field2, field3) = (&names[0], &names[1], &names[2]);
    let (type1, type2, type3) = (&types[0], &types[1], &types[2]);

    let derives: syn::Attribute = syn::parse_quote! {
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    };
    input.attrs.push(derives);

    let struct_name = input.ident.clone();

    let model_impl = quote! {
        impl #struct_name {
            /// Create a new color from its raw components.
            pub const fn new(#field1: #type1, #field2: #type2, #field3: #type3) -> Self {
                Self {
                    #field1,
                    #field2,
                    #field3,
                }
            }

            /// Return the components of this color as a tuple.
            pub const fn to_tuple(&self) -> (#type1, #type2, #type3) {
                (self.#field1, self.#field2, self.#field3)
            }
        }

        impl From<(#type1, #type2, #type3)> for #struct_name {
            fn from(value: (#type1, #type2, #type3)) -> Self {
                Self::new(value.0, value.1, value.2)
            }
        }

        impl From<#struct_name> for (#type1, #type2, #type3) {
            fn from(value: #struct_name) -> Self {
                value.to_tuple()
            }
        }
    };

    quote! {
        #input
        #model_impl
    }
    .into()
}
