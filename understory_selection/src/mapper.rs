// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Key and label extraction for options.
//!
//! Every algorithm in this crate compares options through [`OptionMapper::key_of`]
//! and displays them through [`OptionMapper::label_of`]. Plain string options use
//! [`Identity`]; anything else can supply its own mapper (for example [`FnMapper`]).

use alloc::borrow::Cow;
use alloc::string::String;
use core::marker::PhantomData;

/// Extracts a comparison key and a display label from an option.
///
/// Implementations must be pure: the same option always yields an equal key
/// and the same label.
pub trait OptionMapper<T> {
    /// Key used for equality. May borrow from the option.
    type Key<'a>: PartialEq
    where
        T: 'a;

    /// Key of `option`.
    fn key_of<'a>(&self, option: &'a T) -> Self::Key<'a>;

    /// Display label of `option`.
    fn label_of<'a>(&self, option: &'a T) -> Cow<'a, str>;

    /// True if `a` and `b` have equal keys.
    fn same_key(&self, a: &T, b: &T) -> bool {
        self.key_of(a) == self.key_of(b)
    }
}

/// Uses a string option as both its key and its label.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Identity;

impl<T: AsRef<str>> OptionMapper<T> for Identity {
    type Key<'a>
        = &'a str
    where
        T: 'a;

    #[inline]
    fn key_of<'a>(&self, option: &'a T) -> &'a str {
        option.as_ref()
    }

    #[inline]
    fn label_of<'a>(&self, option: &'a T) -> Cow<'a, str> {
        Cow::Borrowed(option.as_ref())
    }
}

/// Mapper built from a key closure and a label closure.
///
/// ```
/// use understory_selection::{FnMapper, OptionMapper};
///
/// struct Course { code: u32, title: &'static str }
///
/// let mapper = FnMapper::new(|c: &Course| c.code, |c: &Course| String::from(c.title));
/// let a = Course { code: 7, title: "Compilers" };
/// let b = Course { code: 7, title: "Compilers (old)" };
/// assert!(mapper.same_key(&a, &b));
/// assert_eq!(mapper.label_of(&a), "Compilers");
/// ```
pub struct FnMapper<K, KF, LF> {
    key: KF,
    label: LF,
    _key: PhantomData<fn() -> K>,
}

impl<K, KF, LF> FnMapper<K, KF, LF> {
    /// Create a mapper from `key` and `label` closures.
    pub fn new(key: KF, label: LF) -> Self {
        Self {
            key,
            label,
            _key: PhantomData,
        }
    }
}

impl<K, KF, LF> core::fmt::Debug for FnMapper<K, KF, LF> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FnMapper").finish_non_exhaustive()
    }
}

impl<T, K, KF, LF> OptionMapper<T> for FnMapper<K, KF, LF>
where
    K: PartialEq,
    KF: Fn(&T) -> K,
    LF: Fn(&T) -> String,
{
    type Key<'a>
        = K
    where
        T: 'a;

    fn key_of<'a>(&self, option: &'a T) -> K {
        (self.key)(option)
    }

    fn label_of<'a>(&self, option: &'a T) -> Cow<'a, str> {
        Cow::Owned((self.label)(option))
    }
}
