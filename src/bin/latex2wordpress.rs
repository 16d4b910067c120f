//! Command-line driver: reads a LaTeX source and its `.aux` file, runs the
//! rewriting passes in order with progress output, and writes the result.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use latex2wordpress::Converter;

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Convert a LaTeX article and its .aux file into WordPress-ready HTML"
)]
struct Args {
    /// LaTeX source file.
    tex: PathBuf,

    /// .aux file from compiling the LaTeX source.
    aux: PathBuf,

    /// Output file; defaults to <source>_wordpress.tex next to the source.
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut converter = Converter::from_files(&args.tex, &args.aux)?;

    progress("Extracting text...")?;
    converter.extract_body();
    done();

    progress("Substituting custom commands defined via \\newcommand{}...")?;
    converter.substitute_macros();
    done();

    progress("Stripping title elements...")?;
    converter.strip_title_elements();
    done();

    progress("Processing inline math...")?;
    converter.convert_inline_math();
    done();

    progress("Processing \\equation{} environment...")?;
    converter.convert_equations()?;
    done();

    progress("Processing \\align{} environment...")?;
    converter.convert_aligned()?;
    done();

    progress("Processing \\section{} environment...")?;
    converter.convert_sections();
    done();

    progress("Processing cross references...")?;
    converter.convert_references()?;
    done();

    progress("Processing formatting...")?;
    converter.convert_formatting();
    done();

    progress("Writing HTML output...")?;
    let written = converter.write_html(args.output.as_deref())?;
    done();

    println!("Wrote {}", written.display());
    Ok(())
}

fn progress(message: &str) -> io::Result<()> {
    print!("{message} ");
    io::stdout().flush()
}

fn done() {
    println!("done");
}
