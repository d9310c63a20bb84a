use std::{
    cell::{Ref, RefCell, RefMut},
    ops::{Deref, DerefMut},
};

use crate::Ptr;

/// Makes a [PtrMut], with support for casting to trait objects
///
/// `PtrMut::from` covers the common cases, but until `CoerceUnsized` is
/// stabilized, casting from a concrete type to `dyn Trait` needs to be
/// performed on the inner pointer. This macro encapsulates the cast to make
/// life easier at the call site.
#[macro_export]
macro_rules! make_ptr_mut {
    ($value:expr) => {
        $crate::PtrMut::from(
            ::std::rc::Rc::new($crate::LarkCell::from($value)) as ::std::rc::Rc<$crate::LarkCell<_>>
        )
    };
}

/// A mutable reference-counted pointer to a value in allocated memory
pub type PtrMut<T> = Ptr<LarkCell<T>>;

/// A mutable value with borrowing checked at runtime
#[derive(Debug, Default)]
pub struct LarkCell<T: ?Sized>(RefCell<T>);

impl<T> From<T> for LarkCell<T> {
    fn from(value: T) -> Self {
        Self(RefCell::from(value))
    }
}

impl<T: ?Sized> LarkCell<T> {
    /// Immutably borrows the wrapped value
    ///
    /// Panics if the value is currently mutably borrowed.
    pub fn borrow(&self) -> Borrow<'_, T> {
        Borrow(self.0.borrow())
    }

    /// Mutably borrows the wrapped value
    ///
    /// Panics if the value is currently borrowed.
    pub fn borrow_mut(&self) -> BorrowMut<'_, T> {
        BorrowMut(self.0.borrow_mut())
    }
}

/// An immutably borrowed reference to a value borrowed from a [PtrMut]
pub struct Borrow<'a, T: ?Sized>(Ref<'a, T>);

impl<T: ?Sized> Deref for Borrow<'_, T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        self.0.deref()
    }
}

/// A mutably borrowed reference to a value borrowed from a [PtrMut]
pub struct BorrowMut<'a, T: ?Sized>(RefMut<'a, T>);

impl<T: ?Sized> Deref for BorrowMut<'_, T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        self.0.deref()
    }
}

impl<T: ?Sized> DerefMut for BorrowMut<'_, T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut T {
        self.0.deref_mut()
    }
}
