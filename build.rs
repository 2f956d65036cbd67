fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs");

    if let Err(err) = built::write_built_file() {
        println!("cargo:warning=failed to acquire build-time information: {err}");
    }
}
