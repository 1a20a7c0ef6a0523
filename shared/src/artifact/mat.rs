//! MATLAB Level-5 container reading.
//!
//! The simulation and reconstruction drivers write their results with
//! `savemat`, so every artifact is a MAT file holding one or more named numeric
//! arrays. This module flattens each variable into a [`NamedArray`] of `f64`
//! values, keeping the order in which the variables appear in the file.
//!
//! MAT data is stored column-major. Complex variables are reduced to their
//! element-wise magnitude here, so everything downstream is real-valued.

use matfile::{MatFile, NumericData};
use ndarray::{Array2, ShapeBuilder};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use super::ArtifactError;

/// A numeric variable read from an artifact file, widened to `f64`.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedArray {
    pub name: String,
    /// Dimensions as stored in the file
    pub dims: Vec<usize>,
    /// Element values in column-major order
    pub values: Vec<f64>,
}

impl NamedArray {
    pub fn new(name: impl Into<String>, dims: Vec<usize>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            dims,
            values,
        }
    }

    /// Number of non-singleton dimensions.
    ///
    /// MAT files store vectors as `1×N` matrices, so a vector has rank 1 and a
    /// scalar rank 0 even though both carry two stored dimensions.
    pub fn rank(&self) -> usize {
        self.dims.iter().filter(|&&d| d != 1).count()
    }

    /// Row-major image with the first stored dimension as rows.
    ///
    /// Singleton dimensions are dropped first, so a `256×1×256` variable is
    /// accepted as a `256×256` image.
    pub fn to_image(&self) -> Result<Array2<f64>, ArtifactError> {
        let squeezed: Vec<usize> = self.dims.iter().copied().filter(|&d| d != 1).collect();
        let not_an_image = || ArtifactError::NotAnImage {
            name: self.name.clone(),
            dims: self.dims.clone(),
        };

        let (rows, cols) = match squeezed.as_slice() {
            &[rows, cols] if rows > 0 && cols > 0 => (rows, cols),
            _ => return Err(not_an_image()),
        };

        let image = Array2::from_shape_vec((rows, cols).f(), self.values.clone())
            .map_err(|_| not_an_image())?;
        Ok(image.as_standard_layout().into_owned())
    }
}

/// Read every numeric variable in the MAT file at `path`, in file order.
pub fn read_mat_arrays(path: &Path) -> Result<Vec<NamedArray>, ArtifactError> {
    let file = File::open(path)?;
    let mat_file =
        MatFile::parse(BufReader::new(file)).map_err(|e| ArtifactError::Parse(e.to_string()))?;

    Ok(mat_file
        .arrays()
        .iter()
        .map(|array| NamedArray::new(array.name(), array.size().to_vec(), widen(array.data())))
        .collect())
}

fn widen(data: &NumericData) -> Vec<f64> {
    match data {
        NumericData::Int8 { real, imag } => magnitude(real, imag.as_deref(), |v: i8| f64::from(v)),
        NumericData::UInt8 { real, imag } => {
            magnitude(real, imag.as_deref(), |v: u8| f64::from(v))
        }
        NumericData::Int16 { real, imag } => {
            magnitude(real, imag.as_deref(), |v: i16| f64::from(v))
        }
        NumericData::UInt16 { real, imag } => {
            magnitude(real, imag.as_deref(), |v: u16| f64::from(v))
        }
        NumericData::Int32 { real, imag } => {
            magnitude(real, imag.as_deref(), |v: i32| f64::from(v))
        }
        NumericData::UInt32 { real, imag } => {
            magnitude(real, imag.as_deref(), |v: u32| f64::from(v))
        }
        NumericData::Int64 { real, imag } => magnitude(real, imag.as_deref(), |v: i64| v as f64),
        NumericData::UInt64 { real, imag } => magnitude(real, imag.as_deref(), |v: u64| v as f64),
        NumericData::Single { real, imag } => {
            magnitude(real, imag.as_deref(), |v: f32| f64::from(v))
        }
        NumericData::Double { real, imag } => magnitude(real, imag.as_deref(), |v: f64| v),
    }
}

/// Real part as-is, or `|re + i·im|` when an imaginary part is present.
fn magnitude<T: Copy>(real: &[T], imag: Option<&[T]>, to_f64: impl Fn(T) -> f64) -> Vec<f64> {
    match imag {
        None => real.iter().map(|&v| to_f64(v)).collect(),
        Some(imag) => real
            .iter()
            .zip(imag)
            .map(|(&re, &im)| to_f64(re).hypot(to_f64(im)))
            .collect(),
    }
}
