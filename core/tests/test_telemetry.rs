#[cfg(test)]
mod tests {
    use std::time::Duration;
    use lzw_text_core::compression::{Codec, TextCodec};
    use lzw_text_core::config::CodecConfig;
    use lzw_text_core::telemetry::{CodecCounters, Stage, StageTimes, TelemetrySnapshot, TelemetryTimer};

    #[test]
    fn stage_times_accumulate() {
        let mut times = StageTimes::default();
        times.add(Stage::Encode, Duration::from_millis(2));
        times.add(Stage::Encode, Duration::from_millis(3));
        times.add(Stage::Frame, Duration::from_millis(1));

        assert_eq!(times.get(Stage::Encode), Duration::from_millis(5));
        assert_eq!(times.get(Stage::Decode), Duration::ZERO);
        assert_eq!(times.total(), Duration::from_millis(6));
        assert!((times.get_us(Stage::Frame) - 1000.0).abs() < 1e-6);

        let mut other = StageTimes::default();
        other.add(Stage::Frame, Duration::from_millis(4));
        times.merge(&other);
        assert_eq!(times.get(Stage::Frame), Duration::from_millis(5));
        assert_eq!(times.iter().count(), 2);
    }

    #[test]
    fn counters_track_reports() {
        let codec = TextCodec::new(CodecConfig::default()).unwrap();
        let (_, report) = codec.compress_with_report("hello world hello world").unwrap();

        let mut a = CodecCounters::default();
        a.add_compressed(&report);
        a.add_failure();
        assert_eq!(a.documents, 1);
        assert_eq!(a.failures, 1);
        assert_eq!(a.bytes_original, 23);
        assert_eq!(a.codes_emitted, report.codes);

        let mut b = a.clone();
        b += a.clone();
        assert_eq!(b.documents, 2);
        assert_eq!(b.bytes_original, 46);
        assert_eq!(b.generations, 2);
    }

    #[test]
    fn snapshot_carries_ratio_and_serializes() {
        let mut counters = CodecCounters::default();
        counters.documents = 2;
        counters.bytes_original = 1000;
        counters.bytes_compressed = 400;

        let mut timer = TelemetryTimer::new();
        let mut times = StageTimes::default();
        times.add(Stage::Preprocess, Duration::from_micros(10));
        timer.add_stage_times(&times);
        timer.finish();

        let snap = TelemetrySnapshot::from(&counters, &timer);
        assert_eq!(snap.stats.ratio_percent, 60.0);
        assert_eq!(snap.stats.bytes_saved, 600);
        assert!(snap.throughput_bytes_per_sec >= 0.0);
        assert_eq!(snap.stage_times.get(Stage::Preprocess), Duration::from_micros(10));

        let json = snap.to_json().unwrap();
        assert!(json.contains("\"ratio_percent\":60.0"));
        let back: TelemetrySnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.counters, snap.counters);
        assert_eq!(back.stats, snap.stats);
        assert_eq!(back.stage_times, snap.stage_times);
    }

    #[test]
    fn finished_timer_is_frozen() {
        let mut timer = TelemetryTimer::new();
        timer.finish();
        let first = timer.elapsed();
        std::thread::sleep(Duration::from_millis(2));
        assert_eq!(timer.elapsed(), first);
    }
}
