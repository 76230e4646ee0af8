/// Well-known addresses handy for trying the validator out.
///
/// Only the first one passes: the System Program id and the wrapped SOL
/// mint encode to fewer than 44 characters.
const SAMPLE_ADDRESSES: [&str; 3] = [
    "9WzDXwBbmkg8ZTbNMqUxvQRAyrZzDsGYdLVL9zYtAWWM",
    "11111111111111111111111111111112",
    "So11111111111111111111111111111111111111112",
];

pub fn sample_addresses() -> &'static [&'static str] {
    &SAMPLE_ADDRESSES
}
