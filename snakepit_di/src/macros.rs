/// Declares a [`Provider`](crate::Provider) struct.
///
/// Every listed field can be provided by cloning it. Types listed in a
/// `..field: Base { Types }` block are delegated to the nested provider
/// `Base`, so a provider can extend a smaller one, e.g. one that only holds
/// configuration.
///
/// The generated struct has a private `_cache` field that must be initialized
/// with [`TypeMap::default()`](crate::TypeMap).
///
/// ```
/// # use snakepit_di::{provider, Provides, TypeMap};
/// #[derive(Debug, Clone, PartialEq)]
/// struct Greeting(&'static str);
///
/// provider! {
///     Base { greeting: Greeting, }
/// }
///
/// provider! {
///     App { ..base: Base { Greeting, } }
/// }
///
/// let mut app = App {
///     _cache: TypeMap::default(),
///     base: Base {
///         _cache: TypeMap::default(),
///         greeting: Greeting("hiss"),
///     },
/// };
/// assert_eq!(app.provide::<Greeting>(), Greeting("hiss"));
/// ```
#[macro_export]
macro_rules! provider {
    ($(#[doc=$doc:literal])* $vis:vis $ident:ident {
        $( $field:ident: $ty:ty, )*
        $( .. $bfield:ident: $base:ty { $($ity:ty,)* $(,)? } )*
    }) => {
        $(#[doc=$doc])*
        $vis struct $ident {
            _cache: $crate::TypeMap,
            $( $field: $ty, )*
            $( $bfield: $base, )*
        }

        impl $crate::Provider for $ident {
            fn cache(&mut self) -> &mut $crate::TypeMap {
                &mut self._cache
            }
        }

        $(
            impl $crate::Build<$ident> for $ty {
                fn build(provider: &mut $ident) -> Self {
                    ::core::clone::Clone::clone(&provider.$field)
                }
            }
        )*

        $($(
            impl $crate::Build<$ident> for $ity {
                fn build(provider: &mut $ident) -> Self {
                    $crate::Provides::provide(&mut provider.$bfield)
                }
            }
        )*)*
    };
}
