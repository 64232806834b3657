use std::env;

use bch15::bch::sampling;
use bch15::Bch15;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn usage() -> ! {
    eprintln!(
        "Usage:
  cargo run --example selftest
  cargo run --example selftest -- <shifted_message_hex> <error_mask_hex>
  cargo run --example selftest -- --random <weight> <trials>

Example:
  cargo run --example selftest -- 5c00 34
  RUST_LOG=bch15=trace cargo run --example selftest

Notes:
- the message is given already shifted into the top 5 bits (bits 10..14).
- masks of weight <= 3 must always decode back to the sent codeword."
    );
    std::process::exit(2);
}

fn parse_hex(s: &str) -> u16 {
    let s = s.trim_start_matches("0x");
    u16::from_str_radix(s, 16).unwrap_or_else(|_| {
        eprintln!("not a 16-bit hex value: {s}");
        usage();
    })
}

fn run_once(codec: &Bch15, shifted: u16, mask: u16) -> bool {
    let sent = codec.encode_shifted(shifted).unwrap_or_else(|e| {
        eprintln!("{e}");
        usage();
    });
    let received = sent ^ mask;
    let decoded = codec.decode(received).unwrap_or_else(|e| {
        eprintln!("{e}");
        usage();
    });

    println!("Message   : {shifted:#06x}");
    println!("Encoded   : {sent:#06x}");
    println!("Received  : {received:#06x} (mask {mask:#06x})");
    println!("Corrected : {:#06x}", decoded.corrected);
    println!("Offsets   : {:?}", decoded.offsets);
    if let Some(reason) = decoded.failure {
        println!("Failure   : {reason}");
    }
    decoded.corrected == sent
}

fn run_random(codec: &Bch15, weight: usize, trials: usize) -> bool {
    let mut rng = StdRng::from_entropy();
    let mut recovered = 0usize;
    for _ in 0..trials {
        let message = rng.gen_range(0..1u16 << codec.message_bits());
        let sent = codec.encode(message).expect("message fits");
        let mask = sampling::error_mask(&mut rng, weight);
        let decoded = codec.decode(sent ^ mask).expect("received word is 15 bits wide");
        if decoded.corrected == sent {
            recovered += 1;
        }
    }
    println!("weight {weight}: {recovered}/{trials} recovered");
    weight > codec.params().max_errors || recovered == trials
}

fn main() {
    env_logger::init();

    let args = env::args().skip(1).collect::<Vec<_>>();
    let codec = Bch15::standard();

    let ok = match args.as_slice() {
        [] => run_once(codec, 0x5c00, 0x34),
        [flag, weight, trials] if flag == "--random" => {
            let weight = weight.parse().unwrap_or_else(|_| usage());
            let trials = trials.parse().unwrap_or_else(|_| usage());
            if weight > 15 {
                usage();
            }
            run_random(codec, weight, trials)
        }
        [message, mask] => run_once(codec, parse_hex(message), parse_hex(mask)),
        _ => usage(),
    };

    if ok {
        println!("passed");
    } else {
        println!("failed");
        std::process::exit(1);
    }
}
