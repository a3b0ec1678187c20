use super::rules::Validator;

/// A value that knows how to validate itself.
pub trait Verify {
    /// Run this value's rules against `v`.
    fn verify(&self, v: &mut Validator);
}

impl Validator {
    /// Run `target`'s rules on a fresh validator and return it for inspection.
    pub fn do_verify<T: Verify + ?Sized>(target: &T) -> Validator {
        let mut v = Validator::new();
        target.verify(&mut v);
        v
    }
}
