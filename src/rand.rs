use std::num::Wrapping;

// Linear congruential generator parameters
const MUL: u64 = 6364136223846793005; // Knuth section 3.3.4 (p.108)
const INC: u64 = 1442695040888963407;

/// The single pseudorandom stream behind every stipple decision in a drawing session.
#[derive(Clone, PartialEq)]
pub struct Rng {
    state: u64,
}

impl std::fmt::Debug for Rng {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Rng({:#018x})", self.state)
    }
}

impl Rng {
    /// Seeds the stream from arbitrary bytes. The two state halves are murmur2 hashes of the seed
    /// under fixed keys, so short or low-entropy seeds still spread across the whole state.
    pub fn from_seed(seed: &[u8]) -> Rng {
        let lower = murmur2(seed, 1690382925).swap_bytes();
        let upper = murmur2(seed, 72970470).swap_bytes();
        let state = u64::from(lower) | (u64::from(upper) << 32);
        Rng { state }
    }

    /// Picks a random value uniformly distributed between `0.0` (inclusive) and `1.0` (exclusive).
    pub fn rnd(&mut self) -> f64 {
        let old_state = self.state;
        self.state = old_state.wrapping_mul(MUL).wrapping_add(INC);
        // PCG-XSH-RR output function (O'Neill 2014, section 6.3.1), computed on the old state.
        let xorshifted = (((old_state >> 18) ^ old_state) >> 27) as u32;
        let fac = xorshifted.rotate_right((old_state >> 59) as u32);
        2.0f64.powi(-32) * f64::from(fac)
    }

    /// Picks an integer uniformly from `0..n`.
    ///
    /// # Panics
    ///
    /// Panics if `n` is zero.
    pub fn below(&mut self, n: u32) -> u32 {
        assert!(n > 0, "below(0) has no values to pick from");
        ((self.rnd() * f64::from(n)) as u32).min(n - 1)
    }

    /// Returns `true` with probability `1 / n`. For `n == 1` this is always `true` and does not
    /// advance the stream.
    pub fn one_in(&mut self, n: u32) -> bool {
        n == 1 || self.below(n) == 0
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn test_seed_state() {
        assert_eq!(Rng::from_seed(b"").state, 0x381a85e943aeeb00);
        assert_eq!(
            Rng::from_seed(&hex!(
                "efa7bdd92b5e9cd9de9b54ac0e3dc60623f1c989a80ed9c5157fffff10c2a148"
            ))
            .state,
            0x506997572177a894
        );
    }

    #[test]
    fn test_rnd_range_and_determinism() {
        let mut a = Rng::from_seed(b"catface");
        let mut b = Rng::from_seed(b"catface");
        for _ in 0..10_000 {
            let u = a.rnd();
            assert!((0.0..1.0).contains(&u), "{} out of range", u);
            assert_eq!(u, b.rnd());
        }
        assert_ne!(Rng::from_seed(b"cat").rnd(), Rng::from_seed(b"dog").rnd());
    }

    #[test]
    fn test_below_covers_range() {
        let mut rng = Rng::from_seed(b"");
        let mut counts = [0usize; 3];
        for _ in 0..30_000 {
            counts[rng.below(3) as usize] += 1;
        }
        for count in counts {
            assert!((9_000..11_000).contains(&count), "{:?}", counts);
        }
    }

    #[test]
    #[should_panic]
    fn test_below_zero_panics() {
        Rng::from_seed(b"").below(0);
    }

    #[test]
    fn test_one_in_one_does_not_advance() {
        let mut rng = Rng::from_seed(b"\x2e");
        let before = rng.clone();
        assert!((0..100).all(|_| rng.one_in(1)));
        assert_eq!(rng, before);
    }
}

fn murmur2(bytes: &[u8], seed: u32) -> u32 {
    const K: usize = 16;
    const MASK: Wrapping<u32> = Wrapping(0xffff);
    const MASK_BYTE: Wrapping<u32> = Wrapping(0xff);
    const M: Wrapping<u32> = Wrapping(0x5bd1e995);

    // Multiply in 16-bit halves; matches a plain 32-bit wrapping multiply.
    let mul = |v: Wrapping<u32>| (v & MASK) * M + ((((v >> K) * M) & MASK) << K);
    let byte32 = |i: usize| Wrapping(u32::from(bytes[i])) & MASK_BYTE;

    let mut h = Wrapping(seed ^ (bytes.len() as u32));
    let mut chunks = bytes.chunks_exact(4);
    let mut i = 0;
    for _ in chunks.by_ref() {
        let mut k =
            byte32(i) | (byte32(i + 1) << 8) | (byte32(i + 2) << 16) | (byte32(i + 3) << 24);
        i += 4;
        k = mul(k);
        k ^= k >> 24;
        k = mul(k);
        h = mul(h) ^ k;
    }
    let tail = chunks.remainder().len();
    if tail >= 3 {
        h ^= byte32(i + 2) << K;
    }
    if tail >= 2 {
        h ^= byte32(i + 1) << 8;
    }
    if tail >= 1 {
        h ^= byte32(i);
        h = mul(h);
    }

    h ^= h >> 13;
    h = mul(h);
    h ^= h >> 15;

    h.0
}
