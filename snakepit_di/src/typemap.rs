use std::{
    any::{Any, TypeId},
    collections::HashMap,
};

#[derive(Debug, Default)]
pub struct TypeMap(HashMap<TypeId, Box<dyn Any>>);

impl TypeMap {
    pub fn get<T: 'static>(&self) -> Option<&T> {
        self.0
            .get(&TypeId::of::<T>())
            .and_then(|x| x.downcast_ref())
    }

    pub fn insert<T: 'static>(&mut self, x: T) {
        self.0.insert(TypeId::of::<T>(), Box::new(x));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_by_type() {
        let mut map = TypeMap::default();
        map.insert(7u64);
        map.insert("venomous");

        assert_eq!(map.get::<u64>(), Some(&7));
        assert_eq!(map.get::<&str>(), Some(&"venomous"));
        assert_eq!(map.get::<u32>(), None);
    }
}
