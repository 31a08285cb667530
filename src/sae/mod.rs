use burn::nn::loss::{MseLoss, Reduction};
use burn::nn::{Linear, LinearConfig};
use burn::prelude::*;
use burn::tensor::activation::sigmoid;

pub mod basic1;

#[derive(Config, Debug)]
pub struct SaeConfig {
    nb_labels: usize, // 전체 라벨(영화) 수
    #[config(default = 20)]
    in_f: usize,
    #[config(default = 10)]
    out_f: usize,
}

impl SaeConfig {
    /// Returns the initialized model.
    pub fn init<B: Backend>(&self, device: &B::Device) -> Sae<B> {
        Sae {
            // 인코더: nb_labels -> in_f -> out_f
            fc1: LinearConfig::new(self.nb_labels, self.in_f).init(device),
            fc2: LinearConfig::new(self.in_f, self.out_f).init(device),
            // 디코더: out_f -> in_f -> nb_labels
            fc3: LinearConfig::new(self.out_f, self.in_f).init(device),
            fc4: LinearConfig::new(self.in_f, self.nb_labels).init(device),
        }
    }
}

/// Stacked auto-encoder: four fully connected layers, sigmoid on the first three.
#[derive(Module, Debug)]
pub struct Sae<B: Backend> {
    fc1: Linear<B>,
    fc2: Linear<B>,
    fc3: Linear<B>,
    fc4: Linear<B>,
}

impl<B: Backend> Sae<B> {
    /// `[batch, nb_labels]` -> `[batch, nb_labels]`
    pub fn forward(&self, x0: Tensor<B, 2>) -> Tensor<B, 2> {
        let x1 = sigmoid(self.fc1.forward(x0));
        let x2 = sigmoid(self.fc2.forward(x1));

        let x3 = sigmoid(self.fc3.forward(x2));
        self.fc4.forward(x3)
    }

    /// Mean squared reconstruction error of `x0`.
    pub fn forward_loss(&self, x0: Tensor<B, 2>) -> Tensor<B, 1> {
        let output = self.forward(x0.clone());
        MseLoss::new().forward(output, x0, Reduction::Mean)
    }
}
