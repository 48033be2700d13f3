pub mod value_objects;
