use std::process;

fn main() {
    match docpdf_cli::run() {
        Ok(code) => process::exit(code),
        Err(err) => {
            eprintln!("docpdf error: {err:#}");
            process::exit(1);
        }
    }
}
