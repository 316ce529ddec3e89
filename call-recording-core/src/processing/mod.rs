pub mod chunk_buffer;
pub mod loudness;
pub mod mix;
pub mod resample;
pub mod wav;
