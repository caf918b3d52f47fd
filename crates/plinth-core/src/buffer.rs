//! Audio block passed to the processor once per callback.
//!
//! A [`Buffer`] borrows the host's channel slices for the duration of one
//! process call. Creating one never allocates, and all accessors are limited
//! to the block's frame count.

use std::slice;

use crate::sample::Sample;

/// Main-bus input and output channels for one processing block.
///
/// `S` is the sample type (`f32` or `f64`).
pub struct Buffer<'a, 'b, S: Sample = f32> {
    inputs: &'a [&'a [S]],
    outputs: &'a mut [&'b mut [S]],
    num_samples: usize,
}

impl<'a, 'b, S: Sample> Buffer<'a, 'b, S> {
    /// Wrap host channel slices.
    ///
    /// The frame count is limited to the shortest channel slice, so a short
    /// slice can never be indexed out of bounds.
    pub fn new(inputs: &'a [&'a [S]], outputs: &'a mut [&'b mut [S]], num_samples: usize) -> Self {
        let shortest_input = inputs.iter().map(|channel| channel.len());
        let shortest_output = outputs.iter().map(|channel| channel.len());
        let num_samples = shortest_input
            .chain(shortest_output)
            .fold(num_samples, usize::min);

        Self {
            inputs,
            outputs,
            num_samples,
        }
    }

    /// Number of frames in this block.
    #[inline]
    pub fn num_samples(&self) -> usize {
        self.num_samples
    }

    /// Number of input channels.
    #[inline]
    pub fn num_input_channels(&self) -> usize {
        self.inputs.len()
    }

    /// Number of output channels.
    #[inline]
    pub fn num_output_channels(&self) -> usize {
        self.outputs.len()
    }

    /// Input channel `channel`, limited to the block length.
    pub fn input(&self, channel: usize) -> Option<&[S]> {
        self.inputs
            .get(channel)
            .map(|samples| &samples[..self.num_samples])
    }

    /// Output channel `channel`, limited to the block length.
    pub fn output(&mut self, channel: usize) -> Option<&mut [S]> {
        let num_samples = self.num_samples;
        self.outputs
            .get_mut(channel)
            .map(|samples| &mut samples[..num_samples])
    }

    /// Iterate over `(input, output)` pairs for channels present on both sides.
    pub fn zip_channels(&mut self) -> ChannelPairs<'_, 'b, S> {
        ChannelPairs {
            inputs: self.inputs.iter(),
            outputs: self.outputs.iter_mut(),
            num_samples: self.num_samples,
        }
    }

    /// Zero every output channel that has no input channel with the same index.
    pub fn clear_unpaired_outputs(&mut self) {
        let num_samples = self.num_samples;
        let paired = self.inputs.len().min(self.outputs.len());
        for output in self.outputs.iter_mut().skip(paired) {
            output[..num_samples].fill(S::ZERO);
        }
    }

    /// Zero every output channel.
    pub fn clear_outputs(&mut self) {
        let num_samples = self.num_samples;
        for output in self.outputs.iter_mut() {
            output[..num_samples].fill(S::ZERO);
        }
    }
}

/// Iterator returned by [`Buffer::zip_channels`].
pub struct ChannelPairs<'s, 'b, S: Sample> {
    inputs: slice::Iter<'s, &'s [S]>,
    outputs: slice::IterMut<'s, &'b mut [S]>,
    num_samples: usize,
}

impl<'s, 'b, S: Sample> Iterator for ChannelPairs<'s, 'b, S> {
    type Item = (&'s [S], &'s mut [S]);

    fn next(&mut self) -> Option<Self::Item> {
        let input = self.inputs.next()?;
        let output = self.outputs.next()?;
        Some((&input[..self.num_samples], &mut output[..self.num_samples]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zip_channels_pairs_by_index() {
        let left = [1.0f32, 2.0, 3.0];
        let inputs = [&left[..]];
        let mut out_left = [0.0f32; 3];
        let mut out_right = [9.0f32; 3];
        let mut outputs = [&mut out_left[..], &mut out_right[..]];

        let mut buffer = Buffer::new(&inputs, &mut outputs, 3);
        assert_eq!(buffer.num_input_channels(), 1);
        assert_eq!(buffer.num_output_channels(), 2);

        let mut pairs = 0;
        for (input, output) in buffer.zip_channels() {
            output.copy_from_slice(input);
            pairs += 1;
        }
        assert_eq!(pairs, 1);

        buffer.clear_unpaired_outputs();
        assert_eq!(out_left, [1.0, 2.0, 3.0]);
        assert_eq!(out_right, [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_frame_count_limited_to_shortest_slice() {
        let input = [1.0f64; 2];
        let inputs = [&input[..]];
        let mut output = [5.0f64; 4];
        let mut outputs = [&mut output[..]];

        let mut buffer = Buffer::new(&inputs, &mut outputs, 8);
        assert_eq!(buffer.num_samples(), 2);
        assert_eq!(buffer.input(0).map(|c| c.len()), Some(2));
        assert!(buffer.input(1).is_none());

        buffer.clear_outputs();
        assert_eq!(output, [0.0, 0.0, 5.0, 5.0]);
    }

    #[test]
    fn test_output_access() {
        let inputs: [&[f32]; 0] = [];
        let mut output = [1.0f32; 2];
        let mut outputs = [&mut output[..]];

        let mut buffer = Buffer::new(&inputs, &mut outputs, 2);
        if let Some(channel) = buffer.output(0) {
            channel[1] = 4.0;
        }
        assert!(buffer.output(1).is_none());
        assert_eq!(buffer.zip_channels().count(), 0);
        assert_eq!(output, [1.0, 4.0]);
    }
}
