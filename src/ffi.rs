#![allow(non_camel_case_types, non_upper_case_globals)]

use std::os::raw::{c_char, c_uint};

pub type lv_32fc_t = crate::kernels::Complex32;

pub type p_32fc_32f_dot_prod_32fc = unsafe extern "C" fn(
    result: *mut lv_32fc_t,
    input: *const lv_32fc_t,
    taps: *const f32,
    num_points: c_uint,
);

extern "C" {
    pub fn volk_version() -> *const c_char;
    pub fn volk_available_machines() -> *const c_char;
    pub fn volk_get_alignment() -> usize;

    /// Unaligned dispatcher. libvolk points it at a resolver on load, which
    /// overwrites it with the best machine on the first call.
    pub static mut volk_32fc_32f_dot_prod_32fc_u: Option<p_32fc_32f_dot_prod_32fc>;
}
