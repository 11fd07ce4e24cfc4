/// Global histogram equalization of a single 8-bit channel, in place.
///
/// Builds the cumulative histogram and remaps each value through
/// `(cdf(v) - cdf_min) / (n - cdf_min) * 255`, the standard stretch that
/// spreads the occupied intensity range across the full 0–255 span.
/// A channel where every pixel shares one value is left unchanged.
pub fn equalize_channel(channel: &mut [u8]) {
    if channel.is_empty() {
        return;
    }

    let mut hist = [0u32; 256];
    for &v in channel.iter() {
        hist[v as usize] += 1;
    }

    let mut cdf = [0u32; 256];
    let mut running = 0u32;
    for (i, &count) in hist.iter().enumerate() {
        running += count;
        cdf[i] = running;
    }

    let n = channel.len() as u32;
    let cdf_min = cdf
        .iter()
        .copied()
        .find(|&c| c > 0)
        .unwrap_or(0);
    if cdf_min == n {
        // Single-valued channel: the mapping is degenerate.
        return;
    }

    let mut lut = [0u8; 256];
    let denom = (n - cdf_min) as f64;
    for i in 0..256 {
        let num = cdf[i].saturating_sub(cdf_min) as f64;
        lut[i] = (num / denom * 255.0).round() as u8;
    }

    for v in channel.iter_mut() {
        *v = lut[*v as usize];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrow_histogram_is_stretched_to_full_range() {
        // Four evenly-populated values packed into 100..=103.
        let mut channel: Vec<u8> = (0..400).map(|i| 100 + (i % 4) as u8).collect();
        equalize_channel(&mut channel);

        let min = *channel.iter().min().unwrap();
        let max = *channel.iter().max().unwrap();
        assert_eq!(min, 0);
        assert_eq!(max, 255);
    }

    #[test]
    fn flat_channel_is_unchanged() {
        let mut channel = vec![42u8; 64];
        equalize_channel(&mut channel);
        assert!(channel.iter().all(|&v| v == 42));
    }

    #[test]
    fn mapping_is_monotonic() {
        let mut channel: Vec<u8> = vec![10, 10, 10, 50, 50, 200, 220, 220];
        equalize_channel(&mut channel);
        // Ranks must survive: 10 < 50 < 200 < 220 before implies the same after.
        assert!(channel[0] < channel[3]);
        assert!(channel[3] < channel[5]);
        assert!(channel[5] < channel[6]);
    }

    #[test]
    fn empty_channel_is_a_no_op() {
        let mut channel: Vec<u8> = Vec::new();
        equalize_channel(&mut channel);
        assert!(channel.is_empty());
    }
}
