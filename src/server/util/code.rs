use rand::Rng;

/// Generates a random numeric code of the given length.
///
/// Leading zeros are kept, so `"004213"` is a valid six-digit code. Used for signup and
/// ride completion OTPs as well as booking ride codes.
pub fn random_digits(len: usize) -> String {
    let mut rng = rand::rng();

    (0..len)
        .map(|_| char::from(b'0' + rng.random_range(0..10u8)))
        .collect()
}
