use std::env;

fn env_flag(name: &str) -> bool {
    println!("cargo:rerun-if-env-changed={name}");
    matches!(
        env::var(name).as_deref(),
        Ok("1") | Ok("true") | Ok("yes") | Ok("on")
    )
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    // Nothing links against libvolk unless the probe is enabled
    if env::var_os("CARGO_FEATURE_VOLK").is_none() {
        return;
    }

    println!("cargo:rerun-if-env-changed=VOLK_LIB_DIR");
    if let Ok(dir) = env::var("VOLK_LIB_DIR") {
        println!("cargo:rustc-link-search=native={dir}");
    }

    if env_flag("VOLK_STATIC") {
        println!("cargo:rustc-link-lib=static=volk");
        // Static volk built with cpu_features leaves its symbols unresolved
        if env_flag("VOLK_CPU_FEATURES") {
            println!("cargo:rustc-link-lib=static=cpu_features");
        }
        if env::var("CARGO_CFG_TARGET_OS").as_deref() != Ok("windows") {
            println!("cargo:rustc-link-lib=m");
        }
    } else {
        println!("cargo:rustc-link-lib=volk");
    }
}
