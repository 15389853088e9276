/// A record with a fixed little-endian layout inside a sector.
pub trait OnDiskRecord: Sized {
    const SIZE: usize;

    /// Decodes from the first `SIZE` bytes of `bytes`.
    fn decode(bytes: &[u8]) -> Self;
    fn encode(&self) -> Vec<u8>;

    /// Decodes `count` records laid out back to back from `offset`.
    fn decode_run(buffer: &[u8], offset: usize, count: usize) -> Vec<Self> {
        buffer[offset..offset + count * Self::SIZE]
            .chunks_exact(Self::SIZE)
            .map(Self::decode)
            .collect()
    }
}
