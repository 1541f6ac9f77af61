//! C-facing adapter for the almanac engine.

use almanac_base::DeityPath;
use almanac_search::{AlmanacResult, CalibrationProvenance, compute_almanac};
use almanac_time::CalendarDate;

/// ABI version for downstream bindings.
pub const ALMANAC_API_VERSION: u32 = 2;

/// Buffer size for rendered activity lists.
pub const ALMANAC_TEXT_CAPACITY: usize = 512;

/// Buffer size for the display label.
pub const ALMANAC_LABEL_CAPACITY: usize = 128;

/// Buffer size for short names (traits, calibration version).
pub const ALMANAC_NAME_CAPACITY: usize = 64;

/// C-facing status codes.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlmanacStatus {
    Ok = 0,
    InvalidDate = 1,
    BufferTooSmall = 2,
    NullPointer = 3,
    Internal = 255,
}

/// C-compatible almanac result.
///
/// Text fields are NUL-terminated UTF-8.
#[repr(C)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlmanacCResult {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    /// 0 = 甲 .. 9 = 癸
    pub stem_index: u8,
    /// 0 = 子 .. 11 = 亥; the animal shares this index.
    pub branch_index: u8,
    /// 0 = 甲子 .. 59 = 癸亥
    pub cycle_index: u8,
    pub lunar_month: u8,
    /// 1 when the lunar month is a leap month.
    pub lunar_leap: u8,
    pub lunar_day: u8,
    /// 0 = 建 .. 11 = 闭
    pub officer_index: u8,
    pub solar_month: u8,
    /// 0 = Aries .. 11 = Pisces
    pub zodiac_index: u8,
    /// 0 = 青龙 .. 11 = 勾陈
    pub deity_index: u8,
    /// 1 for a 黄道 day, 0 for 黑道.
    pub deity_yellow: u8,
    /// Branch the day clashes with, 0 = 子 .. 11 = 亥.
    pub clash_branch_index: u8,
    /// 0 = explicit calibration, 1 = approximated.
    pub provenance: u8,
    pub lunar_year: i32,
    pub auspicious_utf8: [u8; ALMANAC_TEXT_CAPACITY],
    pub inauspicious_utf8: [u8; ALMANAC_TEXT_CAPACITY],
    pub label_utf8: [u8; ALMANAC_LABEL_CAPACITY],
    pub strength_utf8: [u8; ALMANAC_NAME_CAPACITY],
    pub caution_utf8: [u8; ALMANAC_NAME_CAPACITY],
    pub calibration_version_utf8: [u8; ALMANAC_NAME_CAPACITY],
}

impl TryFrom<&AlmanacResult> for AlmanacCResult {
    type Error = AlmanacStatus;

    fn try_from(value: &AlmanacResult) -> Result<Self, Self::Error> {
        Ok(Self {
            year: value.date.year(),
            month: value.date.month(),
            day: value.date.day(),
            stem_index: value.year.stem.index(),
            branch_index: value.year.branch.index(),
            cycle_index: value.year.cycle_index(),
            lunar_month: value.lunar.month,
            lunar_leap: u8::from(value.lunar.leap),
            lunar_day: value.lunar.day,
            officer_index: value.officer.index(),
            solar_month: value.solar_month,
            zodiac_index: value.zodiac.index(),
            deity_index: value.deity.index(),
            deity_yellow: u8::from(value.deity.path() == DeityPath::Yellow),
            clash_branch_index: value.clash.branch.index(),
            provenance: match value.provenance {
                CalibrationProvenance::Explicit => 0,
                CalibrationProvenance::Approximated => 1,
            },
            lunar_year: value.lunar_year,
            auspicious_utf8: encode_c_utf8(&value.auspicious)?,
            inauspicious_utf8: encode_c_utf8(&value.inauspicious)?,
            label_utf8: encode_c_utf8(&value.label)?,
            strength_utf8: encode_c_utf8(value.traits.strength)?,
            caution_utf8: encode_c_utf8(value.traits.caution)?,
            calibration_version_utf8: encode_c_utf8(&value.calibration_version)?,
        })
    }
}

/// Compute one day with the built-in calibration and default options.
pub fn almanac_compute_internal(
    year: i32,
    month: u32,
    day: u32,
    birth_month: u32,
    birth_day: u32,
) -> Result<AlmanacCResult, AlmanacStatus> {
    let date = CalendarDate::new(year, month, day).map_err(|_| AlmanacStatus::InvalidDate)?;
    let result = compute_almanac(date, birth_month, birth_day);
    AlmanacCResult::try_from(&result)
}

/// Return ABI version of the exported C API.
#[unsafe(no_mangle)]
pub extern "C" fn almanac_api_version() -> u32 {
    ALMANAC_API_VERSION
}

/// Compute the almanac for a Gregorian date.
///
/// The birth month/day select the Western zodiac sign; a day past the end
/// of the month is clamped.
///
/// # Safety
/// `out_result` must be a valid, non-null pointer.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn almanac_compute(
    year: i32,
    month: u32,
    day: u32,
    birth_month: u32,
    birth_day: u32,
    out_result: *mut AlmanacCResult,
) -> AlmanacStatus {
    ffi_boundary(|| {
        if out_result.is_null() {
            return AlmanacStatus::NullPointer;
        }

        match almanac_compute_internal(year, month, day, birth_month, birth_day) {
            Ok(result) => {
                // SAFETY: Pointer is checked for null and written once.
                unsafe { *out_result = result };
                AlmanacStatus::Ok
            }
            Err(status) => status,
        }
    })
}

/// Zodiac sign index (0 = Aries) for a birth month/day.
///
/// # Safety
/// `out_index` must be a valid, non-null pointer.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn almanac_zodiac_index(
    month: u32,
    day: u32,
    out_index: *mut u8,
) -> AlmanacStatus {
    ffi_boundary(|| {
        if out_index.is_null() {
            return AlmanacStatus::NullPointer;
        }
        let sign = almanac_base::resolve_zodiac(month, day);
        // SAFETY: Pointer is checked for null and written once.
        unsafe { *out_index = sign.index() };
        AlmanacStatus::Ok
    })
}

/// Read a NUL-terminated UTF-8 field of [`AlmanacCResult`].
pub fn decode_c_utf8<const N: usize>(buffer: &[u8; N]) -> Result<&str, std::str::Utf8Error> {
    let end = buffer.iter().position(|b| *b == 0).unwrap_or(N);
    std::str::from_utf8(&buffer[..end])
}

fn ffi_boundary(f: impl FnOnce() -> AlmanacStatus) -> AlmanacStatus {
    match std::panic::catch_unwind(std::panic::AssertUnwindSafe(f)) {
        Ok(status) => status,
        Err(_) => AlmanacStatus::Internal,
    }
}

fn encode_c_utf8<const N: usize>(input: &str) -> Result<[u8; N], AlmanacStatus> {
    let bytes = input.as_bytes();
    if bytes.len() >= N {
        return Err(AlmanacStatus::BufferTooSmall);
    }
    if bytes.contains(&0) {
        return Err(AlmanacStatus::Internal);
    }

    let mut out = [0_u8; N];
    out[..bytes.len()].copy_from_slice(bytes);
    Ok(out)
}
