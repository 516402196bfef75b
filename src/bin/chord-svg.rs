use chordlib::{describe_pattern, parse_pattern, render_pattern_to_svg};

struct Args {
    pattern: String,
    output_path: String,
    width: Option<f64>,
    height: Option<f64>,
}

fn print_usage() {
    eprintln!("Usage: chord-svg <pattern> <output.svg> [width height]");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  chord-svg x32010 do-mayor.svg             # C major, default size");
    eprintln!("  chord-svg \"x 0 2 2 1 0\" la-menor.svg 420 520");
}

fn parse_args() -> Result<Args, Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() != 3 && args.len() != 5 {
        print_usage();
        return Err("Invalid number of arguments".into());
    }

    let pattern = args[1].clone();
    let output_path = args[2].clone();

    let (width, height) = if args.len() == 5 {
        let w: f64 = args[3].parse()?;
        let h: f64 = args[4].parse()?;
        if w <= 0.0 || h <= 0.0 {
            return Err("Width and height must be positive".into());
        }
        (Some(w), Some(h))
    } else {
        (None, None)
    };

    Ok(Args {
        pattern,
        output_path,
        width,
        height,
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = parse_args()?;

    let pattern = parse_pattern(&args.pattern)?;
    let svg = render_pattern_to_svg(&pattern, args.width, args.height, None);
    std::fs::write(&args.output_path, &svg)?;

    for line in describe_pattern(&pattern) {
        println!("{line}");
    }
    println!("Wrote {} ({} bytes)", args.output_path, svg.len());

    Ok(())
}
