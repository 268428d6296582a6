use thiserror::Error as ThisError;

/// Accepted instance sizes, inclusive on both ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LocationBounds {
    pub min: usize,
    pub max: usize,
}

impl Default for LocationBounds {
    fn default() -> Self {
        Self { min: 4, max: 16 }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum BoundsError {
    #[error("no locations found, please try again")]
    None,
    #[error("found {found} locations; fewer than {min} makes the problem a bit trivial")]
    TooFew { found: usize, min: usize },
    #[error("found {found} locations; more than {max} would take too long to solve exactly")]
    TooMany { found: usize, max: usize },
}

impl LocationBounds {
    pub fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    pub fn check(&self, found: usize) -> Result<(), BoundsError> {
        if found == 0 {
            Err(BoundsError::None)
        } else if found < self.min {
            Err(BoundsError::TooFew {
                found,
                min: self.min,
            })
        } else if found > self.max {
            Err(BoundsError::TooMany {
                found,
                max: self.max,
            })
        } else {
            Ok(())
        }
    }
}
