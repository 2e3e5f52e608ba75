//!
//! Structure describing secret which is zeroized on drop.
//!

use std::{fmt, marker::PhantomData};

use zeroize::Zeroize as ZeroizableSecret;

use crate::{strategy::Strategy, ExposeInterface, PeekInterface};

///
/// Secret thing which is wiped from memory once it goes out of scope.
///
/// Used for card numbers and security codes.
///
pub struct StrongSecret<S: ZeroizableSecret, I = crate::WithType> {
    pub(crate) inner_secret: S,
    pub(crate) marker: PhantomData<I>,
}

impl<S: ZeroizableSecret, I> StrongSecret<S, I> {
    /// Take ownership of a secret value
    pub fn new(secret: S) -> Self {
        Self {
            inner_secret: secret,
            marker: PhantomData,
        }
    }
}

impl<S: ZeroizableSecret, I> PeekInterface<S> for StrongSecret<S, I> {
    fn peek(&self) -> &S {
        &self.inner_secret
    }
}

impl<S, I> ExposeInterface<S> for StrongSecret<S, I>
where
    S: ZeroizableSecret + Clone,
{
    fn expose(self) -> S {
        self.inner_secret.clone()
    }
}

impl<S: ZeroizableSecret, I> From<S> for StrongSecret<S, I> {
    fn from(secret: S) -> Self {
        Self::new(secret)
    }
}

impl<S: Clone + ZeroizableSecret, I> Clone for StrongSecret<S, I> {
    fn clone(&self) -> Self {
        Self {
            inner_secret: self.inner_secret.clone(),
            marker: PhantomData,
        }
    }
}

impl<S, I> PartialEq for StrongSecret<S, I>
where
    S: PartialEq + ZeroizableSecret,
{
    fn eq(&self, other: &Self) -> bool {
        self.peek().eq(other.peek())
    }
}

impl<S, I> Eq for StrongSecret<S, I> where S: Eq + ZeroizableSecret {}

impl<S: ZeroizableSecret, I: Strategy<S>> fmt::Debug for StrongSecret<S, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        I::fmt(&self.inner_secret, f)
    }
}

impl<S: ZeroizableSecret, I> Drop for StrongSecret<S, I> {
    fn drop(&mut self) {
        self.inner_secret.zeroize();
    }
}
