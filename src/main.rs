//! bin2coe CLI
//!
//! Entry point for the `bin2coe` command-line tool.

use std::path::PathBuf;
use std::process;

use bin2coe::{
    convert, BuiltinDefaults, ByteOrder, ConversionConfig, ConversionInputs, DecodeMode,
    EXIT_FAILURE,
};
use clap::{ArgGroup, Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "bin2coe")]
#[command(about = "Binary to Xilinx COE file converter", version)]
#[command(group(
    ArgGroup::new("source")
        .required(true)
        .multiple(true)
        .args(["binary", "data", "input"])
))]
struct Cli {
    /// Input binary file
    #[arg(long, value_name = "PATH")]
    binary: Option<PathBuf>,

    /// Input hex-data file
    #[arg(long, value_name = "PATH")]
    data: Option<PathBuf>,

    /// Single binary input; the output defaults to <IN>.coe
    #[arg(long = "in", value_name = "PATH", conflicts_with_all = ["binary", "data"])]
    input: Option<PathBuf>,

    /// Output file (default: output.coe, or <IN>.coe with --in)
    #[arg(long, short = 'o', value_name = "PATH")]
    out: Option<PathBuf>,

    /// Word size in bytes
    #[arg(long, visible_alias = "word", default_value_t = BuiltinDefaults::default().word_size)]
    wordsize: usize,

    /// Output depth in words (0 = derive from content)
    #[arg(long, default_value_t = BuiltinDefaults::default().depth)]
    depth: u64,

    /// Word address of the binary input
    #[arg(long, visible_alias = "offset", default_value_t = BuiltinDefaults::default().bin_addr)]
    binaddr: u64,

    /// Token written for words not covered by any input
    #[arg(long = "default", value_name = "TEXT", default_value_t = BuiltinDefaults::default().default_token)]
    default_token: String,

    /// Byte order of the binary input
    #[arg(long, value_enum, default_value_t = Endian::Little)]
    endian: Endian,

    /// Reject non-hex characters and malformed address directives in data files
    #[arg(long)]
    strict: bool,

    /// Print the conversion report as JSON
    #[arg(long)]
    json: bool,

    /// Suppress progress output
    #[arg(long, short = 'q')]
    quiet: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Endian {
    Little,
    Big,
}

impl From<Endian> for ByteOrder {
    fn from(endian: Endian) -> Self {
        match endian {
            Endian::Little => ByteOrder::Little,
            Endian::Big => ByteOrder::Big,
        }
    }
}

impl Cli {
    fn conversion_config(&self) -> ConversionConfig {
        let mode = if self.strict {
            DecodeMode::Strict
        } else {
            DecodeMode::Lenient
        };

        ConversionConfig::default()
            .with_word_size(self.wordsize)
            .with_depth(self.depth)
            .with_bin_addr(self.binaddr)
            .with_default_token(self.default_token.clone())
            .with_byte_order(self.endian.into())
            .with_decode_mode(mode)
            .with_verbose(!self.quiet)
    }

    fn conversion_inputs(&self) -> ConversionInputs {
        let inputs = match self.input {
            Some(ref input) => ConversionInputs::single(input),
            None => ConversionInputs::new(self.binary.clone(), self.data.clone()),
        };

        match self.out {
            Some(ref out) => inputs.with_output(out),
            None => inputs,
        }
    }
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            process::exit(if e.use_stderr() { EXIT_FAILURE } else { 0 });
        }
    };

    if !cli.quiet && !cli.json {
        println!("------------------------------------------------");
        println!("Binary to Xilinx COE File Converter.");
        println!("------------------------------------------------");
    }

    match convert(cli.conversion_config(), &cli.conversion_inputs()) {
        Ok(report) => {
            if cli.json {
                match report.to_json() {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        eprintln!("Error serializing output: {}", e);
                        process::exit(EXIT_FAILURE);
                    }
                }
            } else if !cli.quiet {
                print!("{}", report.to_human());
            }
        }
        Err(e) => {
            if cli.json {
                let output = serde_json::json!({
                    "ok": false,
                    "kind": e.kind(),
                    "message": e.to_string(),
                });
                println!("{}", output);
            }
            eprintln!("Error ({}): {}", e.kind(), e);
            process::exit(e.exit_code());
        }
    }
}
