//! Link flags for the optional native pjsua backend
//!
//! Library names follow the pjproject packaging, which installs each
//! component as `lib<name><suffix>`. Override with:
//! - `UAPROBE_PJSUA_LIB_DIR`: extra search directory
//! - `UAPROBE_PJSUA_LIB_SUFFIX`: name suffix, `-` by default
//! - `UAPROBE_PJSUA_STATIC`: set to link the static archives

use std::env;

const PJSUA_LIBS: &[&str] = &[
    "pjsua",
    "pjsip-ua",
    "pjsip-simple",
    "pjsip",
    "pjmedia-codec",
    "pjmedia",
    "pjmedia-videodev",
    "pjmedia-audiodev",
    "pjnath",
    "pjlib-util",
    "srtp",
    "resample",
    "gsmcodec",
    "speex",
    "ilbccodec",
    "g7221codec",
    "yuv",
    "webrtc",
    "pj",
];

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=UAPROBE_PJSUA_LIB_DIR");
    println!("cargo:rerun-if-env-changed=UAPROBE_PJSUA_LIB_SUFFIX");
    println!("cargo:rerun-if-env-changed=UAPROBE_PJSUA_STATIC");

    if env::var_os("CARGO_FEATURE_PJSUA").is_none() {
        return;
    }

    if let Ok(dir) = env::var("UAPROBE_PJSUA_LIB_DIR") {
        println!("cargo:rustc-link-search=native={}", dir);
    }

    let suffix = env::var("UAPROBE_PJSUA_LIB_SUFFIX").unwrap_or_else(|_| "-".to_string());
    let kind = if env::var_os("UAPROBE_PJSUA_STATIC").is_some() {
        "static"
    } else {
        "dylib"
    };
    for lib in PJSUA_LIBS {
        println!("cargo:rustc-link-lib={}={}{}", kind, lib, suffix);
    }

    match env::var("CARGO_CFG_TARGET_OS").as_deref() {
        Ok("linux") => {
            for lib in ["ssl", "crypto", "m", "pthread"] {
                println!("cargo:rustc-link-lib={}", lib);
            }
        }
        Ok("macos") => {
            println!("cargo:rustc-link-lib=ssl");
            println!("cargo:rustc-link-lib=crypto");
            for framework in [
                "CoreAudio",
                "CoreServices",
                "AudioUnit",
                "AudioToolbox",
                "Foundation",
                "AppKit",
                "AVFoundation",
                "CoreGraphics",
                "QuartzCore",
                "CoreVideo",
                "CoreMedia",
                "VideoToolbox",
                "Security",
            ] {
                println!("cargo:rustc-link-lib=framework={}", framework);
            }
        }
        Ok("windows") => {
            for lib in ["wsock32", "ws2_32", "ole32", "dsound"] {
                println!("cargo:rustc-link-lib={}", lib);
            }
        }
        _ => {}
    }
}
