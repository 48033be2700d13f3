use crate::errors::Result;

/// Objet valeur : immuable, comparé par valeur, auto-validant
pub trait ValueObject: PartialEq + Clone {
    fn validate(&self) -> Result<()>;
}
