//! Mean-color barcodes ("color maps") of video files.
//!
//! Frames are decoded in order, every `interval`-th frame is reduced to
//! its mean RGB color, and each color becomes a bar in one output image.

pub mod shared {
    pub mod color_map_config;
    pub mod color_map_error;
    pub mod color_map_image;
    pub mod constants;
    pub mod frame;
    pub mod mean_color;
    pub mod video_metadata;
}

pub mod video {
    pub mod domain {
        pub mod frame_source;
        pub mod image_writer;
    }
    pub mod infrastructure;
}

pub mod color_map {
    pub mod domain {
        pub mod color_map_buffer;
        pub mod frame_reducer;
    }
}

pub mod pipeline {
    pub mod create_color_map_use_case;
    pub mod pipeline_logger;
    pub mod pipeline_state;
}
