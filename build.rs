use std::env;

fn main() {
    println!("cargo:rerun-if-env-changed=PYO3_PYTHON");

    // Integration tests embed the interpreter; point the loader at libpython.
    let target_os = env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();
    let extension_module = env::var_os("CARGO_FEATURE_EXTENSION_MODULE").is_some();
    if target_os == "windows" || extension_module {
        return;
    }
    if let Some(lib_dir) = &pyo3_build_config::get().lib_dir {
        println!("cargo:rustc-link-arg-tests=-Wl,-rpath,{lib_dir}");
    }
}
