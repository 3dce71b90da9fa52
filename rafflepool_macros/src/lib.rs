use proc_macro::TokenStream;
use quote::quote;
use syn::{Attribute, Data, DeriveInput, Expr, Fields, parse_macro_input, spanned::Spanned};

/// Variant attribute: #[tickets(<const expr>)]
#[proc_macro_derive(TicketedEnum, attributes(tickets))]
pub fn derive_ticketed_enum(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let enum_ident = &input.ident;

    let Data::Enum(data_enum) = &input.data else {
        return syn::Error::new(
            input.ident.span(),
            "TicketedEnum can only be derived for enums",
        )
        .to_compile_error()
        .into();
    };

    if data_enum.variants.is_empty() {
        return syn::Error::new(
            input.ident.span(),
            "TicketedEnum requires at least one variant",
        )
        .to_compile_error()
        .into();
    }

    // Collect (variant_ident, ticket_expr)
    let mut entries = Vec::new();

    for variant in &data_enum.variants {
        // Only fieldless enums are supported (raffle entrants are usually C-like)
        match &variant.fields {
            Fields::Unit => {}
            _ => {
                return syn::Error::new(
                    variant.span(),
                    "TicketedEnum only supports fieldless variants",
                )
                .to_compile_error()
                .into();
            }
        }

        // Find #[tickets(...)]
        let mut ticket_expr: Option<Expr> = None;
        for Attribute { meta, .. } in &variant.attrs {
            if meta.path().is_ident("tickets") {
                match meta {
                    syn::Meta::List(list) => {
                        // Parse inside as a const expression (e.g., 5 or 2 * 10)
                        let expr = syn::parse2::<Expr>(list.tokens.clone()).map_err(|e| {
                            syn::Error::new(list.span(), format!("invalid tickets expr: {e}"))
                        });
                        match expr {
                            Ok(e) => ticket_expr = Some(e),
                            Err(err) => return err.to_compile_error().into(),
                        }
                    }
                    _ => {
                        return syn::Error::new(meta.span(), "use #[tickets(<expr>)]")
                            .to_compile_error()
                            .into();
                    }
                }
            }
        }
        let Some(expr) = ticket_expr else {
            return syn::Error::new(variant.span(), "missing #[tickets(...)] on variant")
                .to_compile_error()
                .into();
        };

        let ident = &variant.ident;
        entries.push(quote! { ((#expr) as u64, Self::#ident) });
    }

    // Generate const ENTRIES and helper raffle() inherent as sugar.
    let expanded = quote! {
        impl rafflepool::TicketedEnum for #enum_ident {
            const ENTRIES: &'static [(u64, Self)] = &[
                #(#entries),*
            ];
        }

        impl #enum_ident {
            /// Build a pre-filled `RafflePool<#enum_ident>` from annotated ticket counts.
            pub fn raffle() -> ::core::result::Result<rafflepool::RafflePool<Self>, rafflepool::PoolError>
            where
                Self: Copy
            {
                <Self as rafflepool::TicketedEnum>::raffle()
            }
        }
    };

    expanded.into()
}
