use log::debug;

use crate::error::OrdkeyError;
use crate::generators::bound::Bound;
use crate::generators::traits::KeyGenerator;

/// Generates `count` strictly ascending keys between `lower` and `upper`.
///
/// Keys are placed by bisection, so their length grows with `log(count)`
/// rather than `count`.
pub fn keys_between<G: KeyGenerator + ?Sized>(
    generator: &G,
    lower: &Bound,
    upper: &Bound,
    count: usize,
) -> Result<Vec<String>, OrdkeyError> {
    let mut keys = Vec::new();
    if count == 0 {
        // Still surface bad bounds to the caller.
        generator.between(lower, upper)?;
        return Ok(keys);
    }
    // `count` is caller input; no allocation happens before the bounds are checked.
    bisect(generator, lower, upper, count, &mut keys)?;
    debug!("Generated {} keys between {:?} and {:?}", keys.len(), lower, upper);
    Ok(keys)
}

fn bisect<G: KeyGenerator + ?Sized>(
    generator: &G,
    lower: &Bound,
    upper: &Bound,
    count: usize,
    keys: &mut Vec<String>,
) -> Result<(), OrdkeyError> {
    if count == 0 {
        return Ok(());
    }
    let middle = Bound::Key(generator.between(lower, upper)?);
    let left = (count - 1) / 2;
    bisect(generator, lower, &middle, left, keys)?;
    if let Bound::Key(key) = &middle {
        keys.push(key.clone());
    }
    bisect(generator, &middle, upper, count - 1 - left, keys)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Append,
    Prepend,
}

/// Endless run of keys walking outward from a bound.
///
/// Created by [`keys_after`] and [`keys_before`]. Each yielded key is the bound
/// for the next one.
pub struct KeyWalk<'g, G: KeyGenerator + ?Sized> {
    generator: &'g G,
    last: Bound,
    direction: Direction,
}

impl<G: KeyGenerator + ?Sized> Iterator for KeyWalk<'_, G> {
    type Item = Result<String, OrdkeyError>;

    fn next(&mut self) -> Option<Self::Item> {
        let next = match self.direction {
            Direction::Append => self.generator.between(&self.last, &Bound::Unbounded),
            Direction::Prepend => self.generator.between(&Bound::Unbounded, &self.last),
        };
        match next {
            Ok(key) => {
                self.last = Bound::Key(key.clone());
                Some(Ok(key))
            }
            Err(e) => Some(Err(e)),
        }
    }
}

/// Keys for repeatedly appending to the end of a list whose last key is `lower`.
pub fn keys_after<'g, G: KeyGenerator + ?Sized>(
    generator: &'g G,
    lower: Bound,
) -> Result<KeyWalk<'g, G>, OrdkeyError> {
    if let Some(key) = lower.as_key().filter(|k| !k.is_empty()) {
        generator.validate(key)?;
    }
    Ok(KeyWalk {
        generator,
        last: lower,
        direction: Direction::Append,
    })
}

/// Keys for repeatedly prepending to the start of a list whose first key is `upper`.
pub fn keys_before<'g, G: KeyGenerator + ?Sized>(
    generator: &'g G,
    upper: Bound,
) -> Result<KeyWalk<'g, G>, OrdkeyError> {
    if let Some(key) = upper.as_key() {
        generator.validate(key)?;
    }
    Ok(KeyWalk {
        generator,
        last: upper,
        direction: Direction::Prepend,
    })
}

/// Checks that every key is canonical and that the list is strictly ascending.
pub fn check_ascending<G: KeyGenerator + ?Sized, S: AsRef<str>>(
    generator: &G,
    keys: &[S],
) -> Result<(), OrdkeyError> {
    for key in keys {
        generator.validate(key.as_ref())?;
    }
    for pair in keys.windows(2) {
        let (lower, upper) = (pair[0].as_ref(), pair[1].as_ref());
        if lower >= upper {
            return Err(OrdkeyError::OrderingViolation {
                lower: lower.to_string(),
                upper: upper.to_string(),
            });
        }
    }
    Ok(())
}
