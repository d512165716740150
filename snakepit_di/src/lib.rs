extern crate self as snakepit_di;

pub use snakepit_di_derive::Build;
pub use typemap::TypeMap;

mod macros;
mod typemap;

/// A container that caches every value it has built, so that each type is
/// constructed at most once per provider.
pub trait Provider: Sized {
    fn cache(&mut self) -> &mut TypeMap;
}

#[diagnostic::on_unimplemented(
    message = "The type `{Self}` cannot be built using the provider `{P}`",
    note = "Add `{Self}` to the provider `{P}` or implement `Build` for `{Self}` and make sure \
            all dependencies are satisfied"
)]
pub trait Build<P: Provider>: Clone + 'static {
    fn build(provider: &mut P) -> Self;
}

pub trait Provides: Provider {
    fn provide<T: Build<Self>>(&mut self) -> T {
        T::build(self)
    }
}

impl<P: Provider> Provides for P {}
