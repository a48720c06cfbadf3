use proc_macro::TokenStream;
use quote::quote;

/// Generate a color model from a struct with exactly three named fields of
/// the same type. The fields are made public, the usual value derives are
/// added and the model gets positional conversions to and from `[T; 3]` and
/// `(T, T, T)` in field order.
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

    let syn::Fields::Named(ref named) = input.fields else {
        return quote! {
            compile_error!("Model fields must be named.");
        }
        .into();
    };

    let field_names = named
        .named
        .iter()
        .filter_map(|f| f.ident.clone())
        .collect::<Vec<_>>();
    debug_assert!(field_names.len() == 3);

    let component = named.named[0].ty.clone();
    if named.named.iter().any(|f| f.ty != component) {
        return quote! {
            compile_error!("All 3 fields of a model must have the same component type.");
        }
        .into();
    }

    let field1 = &field_names[0];
    let field2 = &field_names[1];
    let field3 = &field_names[2];

    // Components are always accessible by name.
    input.fields.iter_mut().for_each(|f| {
        f.vis = syn::Visibility::Public(Default::default());
    });

    let derive: syn::Attribute = syn::parse_quote! {
        #[derive(Clone, Copy, Debug, PartialEq)]
    };
    let serde: syn::Attribute = syn::parse_quote! {
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    };
    input.attrs.extend([derive, serde]);

    let struct_name = input.ident.clone();

    let model_impl: proc_macro2::TokenStream = quote! {
        impl #struct_name {
            /// Create a new color from its three components.
            pub const fn new(#field1: #component, #field2: #component, #field3: #component) -> Self {
                Self {
                    #field1,
                    #field2,
                    #field3,
                }
            }

            /// Return the three components in declaration order.
            pub fn to_array(&self) -> [#component; 3] {
                [self.#field1, self.#field2, self.#field3]
            }
        }

        impl From<[#component; 3]> for #struct_name {
            fn from([#field1, #field2, #field3]: [#component; 3]) -> Self {
                Self::new(#field1, #field2, #field3)
            }
        }

        impl From<(#component, #component, #component)> for #struct_name {
            fn from((#field1, #field2, #field3): (#component, #component, #component)) -> Self {
                Self::new(#field1, #field2, #field3)
            }
        }

        impl From<#struct_name> for [#component; 3] {
            fn from(value: #struct_name) -> Self {
                value.to_array()
            }
        }
    };

    quote! {
        #input
        #model_impl
    }
    .into()
}
