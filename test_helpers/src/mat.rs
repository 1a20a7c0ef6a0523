//! Minimal MATLAB Level-5 writer for test fixtures.
//!
//! Produces uncompressed little-endian files containing double-precision
//! numeric matrices, optionally complex. This is the subset `savemat` emits
//! for the float arrays written by the simulation drivers.

use ndarray::Array2;
use std::io;
use std::path::Path;

const MI_INT8: u32 = 1;
const MI_INT32: u32 = 5;
const MI_UINT32: u32 = 6;
const MI_DOUBLE: u32 = 9;
const MI_MATRIX: u32 = 14;

const MX_DOUBLE_CLASS: u32 = 6;
const COMPLEX_FLAG: u32 = 0x0800;

/// Error type for fixture construction
#[derive(thiserror::Error, Debug)]
pub enum MatFixtureError {
    #[error("variable `{name}` has {values} values but dims {dims:?}")]
    ShapeMismatch {
        name: String,
        values: usize,
        dims: Vec<usize>,
    },
}

/// One named variable to be written.
#[derive(Debug, Clone, PartialEq)]
pub struct MatVariable {
    pub name: String,
    pub dims: Vec<usize>,
    /// Column-major real part
    pub real: Vec<f64>,
    /// Column-major imaginary part
    pub imag: Option<Vec<f64>>,
}

impl MatVariable {
    /// Variable with explicit dims and column-major data.
    pub fn new(
        name: &str,
        dims: Vec<usize>,
        real: Vec<f64>,
        imag: Option<Vec<f64>>,
    ) -> Result<Self, MatFixtureError> {
        let expected: usize = dims.iter().product();
        let imag_ok = imag.as_ref().map_or(true, |im| im.len() == expected);
        if real.len() != expected || !imag_ok {
            return Err(MatFixtureError::ShapeMismatch {
                name: name.to_string(),
                values: real.len(),
                dims,
            });
        }
        Ok(Self {
            name: name.to_string(),
            dims,
            real,
            imag,
        })
    }

    /// Real matrix from a row-major ndarray image.
    pub fn image(name: &str, image: &Array2<f64>) -> Self {
        let (rows, cols) = image.dim();
        Self {
            name: name.to_string(),
            dims: vec![rows, cols],
            real: column_major(image),
            imag: None,
        }
    }

    /// Complex matrix from row-major real and imaginary parts of equal shape.
    pub fn complex_image(name: &str, real: &Array2<f64>, imag: &Array2<f64>) -> Self {
        assert_eq!(real.dim(), imag.dim(), "real and imaginary parts differ");
        let (rows, cols) = real.dim();
        Self {
            name: name.to_string(),
            dims: vec![rows, cols],
            real: column_major(real),
            imag: Some(column_major(imag)),
        }
    }

    /// Row vector (`1×N`), the way `savemat` stores 1-D arrays.
    pub fn vector(name: &str, values: &[f64]) -> Self {
        Self {
            name: name.to_string(),
            dims: vec![1, values.len()],
            real: values.to_vec(),
            imag: None,
        }
    }
}

fn column_major(image: &Array2<f64>) -> Vec<f64> {
    image.t().iter().copied().collect()
}

/// Encode variables into a complete MAT file image.
pub fn encode_mat(variables: &[MatVariable]) -> Vec<u8> {
    let mut out = header();
    for variable in variables {
        out.extend(element(MI_MATRIX, &matrix_payload(variable)));
    }
    out
}

/// Encode `variables` and write them to `path`, creating parent directories.
pub fn write_mat<P: AsRef<Path>>(path: P, variables: &[MatVariable]) -> io::Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, encode_mat(variables))
}

fn header() -> Vec<u8> {
    let mut header = b"MATLAB 5.0 MAT-file, Platform: test_helpers".to_vec();
    header.resize(116, b' ');
    header.extend([0u8; 8]);
    header.extend(0x0100u16.to_le_bytes());
    header.extend(b"IM");
    header
}

fn matrix_payload(variable: &MatVariable) -> Vec<u8> {
    let mut flags = MX_DOUBLE_CLASS;
    if variable.imag.is_some() {
        flags |= COMPLEX_FLAG;
    }

    let mut payload = Vec::new();
    payload.extend(element(MI_UINT32, &words(&[flags, 0])));

    let dims: Vec<u8> = variable
        .dims
        .iter()
        .flat_map(|&d| (d as i32).to_le_bytes())
        .collect();
    payload.extend(element(MI_INT32, &dims));
    payload.extend(element(MI_INT8, variable.name.as_bytes()));
    payload.extend(element(MI_DOUBLE, &doubles(&variable.real)));
    if let Some(imag) = &variable.imag {
        payload.extend(element(MI_DOUBLE, &doubles(imag)));
    }
    payload
}

/// Tagged data element padded to an 8-byte boundary.
fn element(data_type: u32, data: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(8 + data.len() + 7);
    out.extend(data_type.to_le_bytes());
    out.extend((data.len() as u32).to_le_bytes());
    out.extend_from_slice(data);
    while out.len() % 8 != 0 {
        out.push(0);
    }
    out
}

fn words(values: &[u32]) -> Vec<u8> {
    values.iter().flat_map(|v| v.to_le_bytes()).collect()
}

fn doubles(values: &[f64]) -> Vec<u8> {
    values.iter().flat_map(|v| v.to_le_bytes()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_header_layout() {
        let bytes = encode_mat(&[]);
        assert_eq!(bytes.len(), 128);
        assert_eq!(&bytes[126..128], b"IM");
        assert_eq!(&bytes[124..126], &[0x00, 0x01]);
    }

    #[test]
    fn test_elements_are_aligned() {
        let bytes = encode_mat(&[MatVariable::vector("abc", &[1.0, 2.0, 3.0])]);
        assert_eq!(bytes.len() % 8, 0);

        let tag_type = u32::from_le_bytes(bytes[128..132].try_into().unwrap());
        let tag_len = u32::from_le_bytes(bytes[132..136].try_into().unwrap()) as usize;
        assert_eq!(tag_type, MI_MATRIX);
        assert_eq!(128 + 8 + tag_len, bytes.len());
    }

    #[test]
    fn test_column_major_order() {
        let variable = MatVariable::image("m", &array![[1.0, 2.0], [3.0, 4.0]]);
        assert_eq!(variable.real, vec![1.0, 3.0, 2.0, 4.0]);
        assert_eq!(variable.dims, vec![2, 2]);
    }

    #[test]
    fn test_new_checks_shape() {
        assert!(MatVariable::new("bad", vec![2, 2], vec![1.0; 3], None).is_err());
        assert!(MatVariable::new("ok", vec![2, 2], vec![1.0; 4], Some(vec![0.0; 4])).is_ok());
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("data/tr/tr_result_0001.mat");

        write_mat(&path, &[MatVariable::vector("t", &[0.0])]).unwrap();
        assert!(path.exists());
    }
}
