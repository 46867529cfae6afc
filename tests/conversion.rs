//! End-to-end conversion tests
//!
//! Drive `convert` with files on disk and check the written COE vector and
//! the returned report.

mod fixtures;

use std::fs;
use std::path::Path;

use bin2coe::{
    convert, ByteOrder, ConfigError, ConversionConfig, ConversionContext, ConversionInputs,
    ConvertError, DecodeMode, ErrorKind,
};
use fixtures::{boot_dat_path, coe_tokens};
use tempfile::TempDir;

fn write_file(dir: &TempDir, name: &str, bytes: &[u8]) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, bytes).unwrap();
    path
}

fn read_tokens(path: &Path) -> Vec<String> {
    coe_tokens(&fs::read_to_string(path).unwrap())
}

// =============================================================================
// Binary input
// =============================================================================

mod binary_tests {
    use super::*;

    #[test]
    fn test_binary_little_endian_words() {
        let dir = TempDir::new().unwrap();
        let bin = write_file(&dir, "fw.bin", &[0x01, 0x02, 0x03, 0x04, 0x05]);
        let out = dir.path().join("fw.coe");

        let inputs = ConversionInputs::new(Some(bin), None).with_output(&out);
        let report = convert(ConversionConfig::default(), &inputs).unwrap();

        assert_eq!(read_tokens(&out), vec!["04030201", "00000005"]);
        assert_eq!(report.depth, 2);
        assert_eq!(report.tokens, 2);
    }

    #[test]
    fn test_binary_big_endian_words() {
        let dir = TempDir::new().unwrap();
        let bin = write_file(&dir, "fw.bin", &[0x01, 0x02, 0x03, 0x04]);
        let out = dir.path().join("fw.coe");

        let config = ConversionConfig::default().with_byte_order(ByteOrder::Big);
        let inputs = ConversionInputs::new(Some(bin), None).with_output(&out);
        convert(config, &inputs).unwrap();

        assert_eq!(read_tokens(&out), vec!["01020304"]);
    }

    #[test]
    fn test_input_shorter_than_one_word() {
        let dir = TempDir::new().unwrap();
        let bin = write_file(&dir, "tiny.bin", &[0xAB]);
        let out = dir.path().join("tiny.coe");

        let inputs = ConversionInputs::new(Some(bin), None).with_output(&out);
        convert(ConversionConfig::default(), &inputs).unwrap();

        assert_eq!(read_tokens(&out), vec!["000000ab"]);
    }

    #[test]
    fn test_gap_filling_around_offset() {
        let dir = TempDir::new().unwrap();
        let bin = write_file(&dir, "fw.bin", &[0xEF, 0xBE, 0xAD, 0xDE]);
        let out = dir.path().join("fw.coe");

        let config = ConversionConfig::default()
            .with_bin_addr(5)
            .with_depth(8)
            .with_default_token("dead");
        let inputs = ConversionInputs::new(Some(bin), None).with_output(&out);
        convert(config, &inputs).unwrap();

        let tokens = read_tokens(&out);
        assert_eq!(tokens.len(), 8);
        assert!(tokens[..5].iter().all(|t| t == "dead"));
        assert_eq!(tokens[5], "deadbeef");
        assert!(tokens[6..].iter().all(|t| t == "dead"));
    }

    #[test]
    fn test_depth_too_small_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let bin = write_file(&dir, "fw.bin", &[0; 20]);
        let out = dir.path().join("fw.coe");

        let config = ConversionConfig::default().with_depth(3);
        let inputs = ConversionInputs::new(Some(bin), None).with_output(&out);
        let err = convert(config, &inputs).unwrap_err();

        assert!(matches!(
            err,
            ConvertError::DepthTooSmall {
                declared: 3,
                required: 5
            }
        ));
        assert_eq!(err.kind(), ErrorKind::Capacity);
        assert!(!out.exists());
    }

    #[test]
    fn test_single_input_output_name() {
        let dir = TempDir::new().unwrap();
        let bin = write_file(&dir, "fw.bin", &[1, 2]);

        let report = convert(
            ConversionConfig::default().with_word_size(2),
            &ConversionInputs::single(&bin),
        )
        .unwrap();

        let out = dir.path().join("fw.bin.coe");
        assert_eq!(report.output, out.display().to_string());
        assert_eq!(read_tokens(&out), vec!["0201"]);
    }

    #[test]
    fn test_missing_binary_file() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("out.coe");
        let inputs = ConversionInputs::new(Some(dir.path().join("missing.bin")), None)
            .with_output(&out);

        let err = convert(ConversionConfig::default(), &inputs).unwrap_err();
        assert!(matches!(err, ConvertError::Read { .. }));
        assert_eq!(err.exit_code(), -1);
        assert!(!out.exists());
    }
}

// =============================================================================
// Hex-data input
// =============================================================================

mod data_tests {
    use super::*;

    #[test]
    fn test_boot_fixture() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("boot.coe");

        let inputs = ConversionInputs::new(None, Some(boot_dat_path())).with_output(&out);
        let report = convert(ConversionConfig::default(), &inputs).unwrap();

        assert_eq!(
            read_tokens(&out),
            vec![
                "00000013", "00100093", "00208113", "0", "0", "0", "0", "0", "deadbeef",
                "0000cafe",
            ]
        );
        assert_eq!(report.regions.len(), 2);
        assert_eq!(report.regions[0].start, 0);
        assert_eq!(report.regions[0].words, 3);
        assert_eq!(report.regions[1].start, 8);
        assert_eq!(report.sources[0].implied_depth, 10);
    }

    #[test]
    fn test_directives_out_of_order() {
        let dir = TempDir::new().unwrap();
        let dat = write_file(&dir, "mem.dat", b"@10\nAB\n@5\nCD");
        let out = dir.path().join("mem.coe");

        let config = ConversionConfig::default().with_word_size(1);
        let inputs = ConversionInputs::new(None, Some(dat)).with_output(&out);
        let report = convert(config, &inputs).unwrap();

        let tokens = read_tokens(&out);
        assert_eq!(tokens.len(), 11);
        assert_eq!(tokens[5], "cd");
        assert_eq!(tokens[10], "ab");
        assert_eq!(report.regions.iter().map(|r| r.start).collect::<Vec<_>>(), vec![5, 10]);
    }

    #[test]
    fn test_hex_line_renders_as_written() {
        let dir = TempDir::new().unwrap();
        let dat = write_file(&dir, "mem.dat", b"01020304\n");
        let out = dir.path().join("mem.coe");

        let inputs = ConversionInputs::new(None, Some(dat)).with_output(&out);
        convert(ConversionConfig::default(), &inputs).unwrap();

        assert_eq!(read_tokens(&out), vec!["01020304"]);
    }

    #[test]
    fn test_strict_mode_rejects_bad_digit() {
        let dir = TempDir::new().unwrap();
        let dat = write_file(&dir, "mem.dat", b"0000\nzz00\n");
        let out = dir.path().join("mem.coe");

        let config = ConversionConfig::default().with_decode_mode(DecodeMode::Strict);
        let inputs = ConversionInputs::new(None, Some(dat)).with_output(&out);
        let err = convert(config, &inputs).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Decode);
        assert!(err.to_string().starts_with("line 2:"));
        assert!(!out.exists());
    }
}

// =============================================================================
// Combined inputs and configuration
// =============================================================================

mod combined_tests {
    use super::*;

    #[test]
    fn test_binary_and_data_merged() {
        let dir = TempDir::new().unwrap();
        let bin = write_file(&dir, "fw.bin", &[0x11, 0x22, 0x33, 0x44]);
        let dat = write_file(&dir, "mem.dat", b"@4\n55667788\n");
        let out = dir.path().join("rom.coe");

        let config = ConversionConfig::default().with_depth(6).with_default_token("ffffffff");
        let inputs = ConversionInputs::new(Some(bin), Some(dat)).with_output(&out);
        let report = convert(config, &inputs).unwrap();

        assert_eq!(
            read_tokens(&out),
            vec!["44332211", "ffffffff", "ffffffff", "ffffffff", "55667788", "ffffffff"]
        );
        assert_eq!(report.sources.len(), 2);
        assert_eq!(report.tokens, 6);
    }

    #[test]
    fn test_token_count_is_max_of_declared_and_implied() {
        let dir = TempDir::new().unwrap();
        let bin = write_file(&dir, "fw.bin", &[0; 12]);

        for (declared, expected) in [(0u64, 3u64), (3, 3), (7, 7)] {
            let out = dir.path().join(format!("out-{}.coe", declared));
            let config = ConversionConfig::default().with_depth(declared);
            let inputs = ConversionInputs::new(Some(bin.clone()), None).with_output(&out);
            let report = convert(config, &inputs).unwrap();

            assert_eq!(read_tokens(&out).len() as u64, expected);
            assert_eq!(report.depth, expected);
        }
    }

    #[test]
    fn test_zero_word_size_fails_before_reading() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("out.coe");
        let inputs = ConversionInputs::new(Some(dir.path().join("missing.bin")), None)
            .with_output(&out);

        let err = convert(ConversionConfig::default().with_word_size(0), &inputs).unwrap_err();
        assert!(matches!(err, ConvertError::Config(ConfigError::ZeroWordSize)));
        assert!(!out.exists());
    }

    #[test]
    fn test_report_digest_matches_file() {
        let dir = TempDir::new().unwrap();
        let bin = write_file(&dir, "fw.bin", &[1, 2, 3, 4]);
        let out = dir.path().join("fw.coe");

        let inputs = ConversionInputs::new(Some(bin), None).with_output(&out);
        let report = convert(ConversionConfig::default(), &inputs).unwrap();

        let written = fs::read(&out).unwrap();
        assert_eq!(report.output_bytes, written.len() as u64);
        assert_eq!(report.output_digest.len(), 64);

        let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(json["sources"][0]["kind"], "binary");
        assert_eq!(json["output_digest"], report.output_digest);
    }

    #[test]
    fn test_context_in_memory() {
        let config = ConversionConfig::default().with_word_size(2).with_depth(4);
        let mut context = ConversionContext::new(config).unwrap();
        context.load_hex_data_str("# two words\nbeef\ncafe\n").unwrap();

        let encoded = context.encode().unwrap();
        let tokens = coe_tokens(&String::from_utf8(encoded.bytes).unwrap());
        assert_eq!(tokens, vec!["beef", "cafe", "0", "0"]);
    }
}
