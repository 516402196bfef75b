//! JNI bindings for Android.
//!
//! These functions are called from Kotlin via the JNI bridge.

use jni::objects::{JClass, JString};
use jni::sys::{jfloat, jstring};
use jni::JNIEnv;

use crate::{describe_text_to_json, parse_pattern, render_text_to_svg};

/// Render pattern text to SVG.
///
/// Called from Kotlin as:
///   external fun renderPattern(pattern: String, width: Float, height: Float, pixelRatio: Float): String?
#[no_mangle]
pub extern "system" fn Java_com_acordes_app_ChordLib_renderPattern(
    mut env: JNIEnv,
    _class: JClass,
    pattern: JString,
    width: jfloat,
    height: jfloat,
    pixel_ratio: jfloat,
) -> jstring {
    let raw: String = match env.get_string(&pattern) {
        Ok(s) => s.into(),
        Err(_) => return std::ptr::null_mut(),
    };

    let w = if width > 0.0 { Some(f64::from(width)) } else { None };
    let h = if height > 0.0 { Some(f64::from(height)) } else { None };
    let r = if pixel_ratio > 0.0 { Some(f64::from(pixel_ratio)) } else { None };

    match render_text_to_svg(&raw, w, h, r) {
        Ok(svg) => match env.new_string(&svg) {
            Ok(js) => js.into_raw(),
            Err(_) => std::ptr::null_mut(),
        },
        Err(_) => std::ptr::null_mut(),
    }
}

/// Describe pattern text as a JSON array of display lines.
///
/// Called from Kotlin as:
///   external fun describePattern(pattern: String): String?
#[no_mangle]
pub extern "system" fn Java_com_acordes_app_ChordLib_describePattern(
    mut env: JNIEnv,
    _class: JClass,
    pattern: JString,
) -> jstring {
    let raw: String = match env.get_string(&pattern) {
        Ok(s) => s.into(),
        Err(_) => return std::ptr::null_mut(),
    };

    match describe_text_to_json(&raw) {
        Ok(json) => match env.new_string(&json) {
            Ok(js) => js.into_raw(),
            Err(_) => std::ptr::null_mut(),
        },
        Err(_) => std::ptr::null_mut(),
    }
}

/// Validate pattern text. Returns null for valid input, or the user-facing
/// error message the host shows in its error area.
///
/// Called from Kotlin as:
///   external fun validatePattern(pattern: String): String?
#[no_mangle]
pub extern "system" fn Java_com_acordes_app_ChordLib_validatePattern(
    mut env: JNIEnv,
    _class: JClass,
    pattern: JString,
) -> jstring {
    let raw: String = match env.get_string(&pattern) {
        Ok(s) => s.into(),
        Err(_) => return std::ptr::null_mut(),
    };

    match parse_pattern(&raw) {
        Ok(_) => std::ptr::null_mut(),
        Err(message) => match env.new_string(&message) {
            Ok(js) => js.into_raw(),
            Err(_) => std::ptr::null_mut(),
        },
    }
}
