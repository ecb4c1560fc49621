//! UUIDv7-related functionality

use crate::Uuid;
use rand::{rngs::ThreadRng, RngCore};
use std::cell::RefCell;
use std::time::{SystemTime, UNIX_EPOCH};
use std::{error, fmt};

thread_local! {
    static DEFAULT_GENERATOR: RefCell<Generator<ThreadRng>> = Default::default();
}

/// Generates a UUIDv7 object.
///
/// This function employs a thread-local generator over the thread-local
/// CSPRNG, so concurrent callers need no coordination.
///
/// # Errors
///
/// Fails if the random number source cannot supply bytes. The error is
/// surfaced immediately; there is no internal retry.
///
/// # Examples
///
/// ```rust
/// let uuid = uuidv7::uuid7()?;
/// println!("{}", uuid); // e.g. "01890a5d-ac96-774b-bcce-b302099a8057"
/// println!("{:?}", uuid.as_bytes()); // as 16-byte big-endian array
/// # Ok::<(), uuidv7::GenerateError>(())
/// ```
pub fn uuid7() -> Result<Uuid, GenerateError> {
    DEFAULT_GENERATOR.with(|g| g.borrow_mut().generate())
}

/// Represents a UUIDv7 generator that reads the wall clock and an
/// encapsulated random number generator.
///
/// The RNG is a type parameter so that callers (and tests) can substitute any
/// [`RngCore`] implementation; the timestamp can be injected through
/// [`generate_at`](Generator::generate_at) for the same reason.
///
/// # Examples
///
/// ```rust
/// use uuidv7::v7::Generator;
///
/// let mut g = Generator::new(rand::rngs::OsRng);
/// println!("{}", g.generate()?);
/// # Ok::<(), uuidv7::GenerateError>(())
/// ```
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct Generator<R> {
    /// Random number generator used by the generator.
    rng: R,
}

impl<R: RngCore> Generator<R> {
    /// Creates a generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generates a new UUIDv7 object from the current system time.
    pub fn generate(&mut self) -> Result<Uuid, GenerateError> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock may have gone backwards");
        self.generate_at(now.as_secs() * 1_000 + u64::from(now.subsec_millis()))
    }

    /// Generates a new UUIDv7 object from a `unix_ts_ms` supplied by the
    /// caller.
    ///
    /// The low 48 bits of `unix_ts_ms` become the identifier's timestamp
    /// field; the remaining bits are filled from the random number generator
    /// before the version and variant tags are applied.
    pub fn generate_at(&mut self, unix_ts_ms: u64) -> Result<Uuid, GenerateError> {
        let mut bytes = [0u8; 16];
        bytes[..8].copy_from_slice(&(unix_ts_ms << 16).to_be_bytes());

        // bytes 6-7 are timestamp spillover; the random fill overwrites them
        self.rng
            .try_fill_bytes(&mut bytes[6..])
            .map_err(GenerateError)?;

        bytes[6] = (bytes[6] & 0x0f) | 0x70; // version 7
        bytes[8] = (bytes[8] & 0x3f) | 0x80; // variant 10

        Ok(Uuid::from(bytes))
    }
}

/// Error obtaining random bytes while generating a UUID.
///
/// No partial identifier escapes alongside this error; callers must not
/// mistake any fallback value for a valid UUID.
#[derive(Debug)]
pub struct GenerateError(rand::Error);

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "could not read random bytes: {}", self.0)
    }
}

impl error::Error for GenerateError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        Some(&self.0)
    }
}
