/// Compiles the C sources under `native/` into a static library and links
/// it into the crate.
use native_build::Cmd;

fn main() {
    let out_dir = std::env::var("OUT_DIR").expect("OUT_DIR must be set in build script");

    let result = Cmd::default()
        .set_path("native")
        .set_output_path(format!("{}/native-out", out_dir))
        .add_flag("-Wall")
        .build();

    let library = match result {
        Ok(library) => library,
        Err(e) => panic!("native build failed: {}", e),
    };

    println!("cargo::rustc-link-search=native={}", library.dir().display());
    println!("cargo::rustc-link-lib=static={}", library.name());

    println!("cargo::rerun-if-changed=native");
    println!("cargo::rerun-if-env-changed=CC");
    println!("cargo::rerun-if-env-changed=AR");
}
