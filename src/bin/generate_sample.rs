//! Deterministic generator for `data/starfish.csv`.
//!
//! Produces clustered occurrence sites with a per-species depth band so the
//! default 0–50 m range shows a meaningful subset.

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

fn main() {
    let mut rng = SimpleRng::new(42);

    // Survey sites around the British Isles: (longitude, latitude, spread).
    let sites = [
        (-4.2, 50.3, 0.4),  // Plymouth Sound
        (-5.1, 51.6, 0.3),  // Pembrokeshire
        (-1.4, 50.7, 0.3),  // Solent
        (-6.2, 56.5, 0.5),  // Inner Hebrides
        (-9.0, 53.2, 0.5),  // Galway Bay
    ];

    // (species, typical depth, depth spread, observations per site)
    let species_bands = [
        ("Common Starfish", 25.0, 15.0, 5),
        ("Sun Star", 90.0, 45.0, 4),
        ("Bloody Henry", 200.0, 90.0, 3),
    ];

    let output_path = "data/starfish.csv";
    let mut writer = csv::Writer::from_path(output_path).expect("Failed to create output file");
    writer
        .write_record(["depth", "longitude", "latitude", "species"])
        .expect("Failed to write header");

    let mut rows = 0usize;
    for &(lon, lat, spread) in &sites {
        for &(species, depth_mean, depth_sd, count) in &species_bands {
            for _ in 0..count {
                let depth = rng.gauss(depth_mean, depth_sd).clamp(0.0, 500.0);
                let longitude = rng.gauss(lon, spread);
                let latitude = rng.gauss(lat, spread);
                writer
                    .write_record([
                        format!("{depth:.1}"),
                        format!("{longitude:.4}"),
                        format!("{latitude:.4}"),
                        species.to_string(),
                    ])
                    .expect("Failed to write row");
                rows += 1;
            }
        }
    }

    writer.flush().expect("Failed to flush output");
    println!("Wrote {rows} occurrence records to {output_path}");
}
