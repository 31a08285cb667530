use anyhow::{ensure, Result};
use burn::prelude::*;
use burn::tensor::activation::sigmoid;
use burn::tensor::Distribution;

pub mod basic1;

/*RBM */
//가시 노드 nv개, 은닉 노드 nh개. 평점 -1 은 "평가 안 함"
#[derive(Config, Debug)]
pub struct RbmConfig {
    pub nv: usize, // 가시 노드 수
    pub nh: usize, // 은닉 노드 수
    #[config(default = "0.0")]
    pub mean: f64,
    #[config(default = "1.0")]
    pub std: f64,
}

impl RbmConfig {
    /// Returns a machine with weights and biases drawn from `Normal(mean, std)`.
    pub fn init<B: Backend>(&self, device: &B::Device) -> Rbm<B> {
        let normal = || Distribution::Normal(self.mean, self.std);
        Rbm::new(
            Tensor::random([self.nh, self.nv], normal(), device),
            Tensor::random([1, self.nh], normal(), device),
            Tensor::random([1, self.nv], normal(), device),
        )
    }
}

/// Restricted Boltzmann Machine over binary visible/hidden units.
///
/// * `w` - `[nh, nv]` weight matrix
/// * `a` - `[1, nh]` bias of `p(h|v)`
/// * `b` - `[1, nv]` bias of `p(v|h)`
#[derive(Debug, Clone)]
pub struct Rbm<B: Backend> {
    pub w: Tensor<B, 2>,
    pub a: Tensor<B, 2>,
    pub b: Tensor<B, 2>,
}

/// Probabilities together with one Bernoulli draw from them.
#[derive(Debug, Clone)]
pub struct GibbsSample<B: Backend> {
    pub probabilities: Tensor<B, 2>,
    pub sample: Tensor<B, 2>,
}

impl<B: Backend> Rbm<B> {
    pub fn new(w: Tensor<B, 2>, a: Tensor<B, 2>, b: Tensor<B, 2>) -> Self {
        Self { w, a, b }
    }

    pub fn num_visible(&self) -> usize {
        self.w.dims()[1]
    }

    pub fn num_hidden(&self) -> usize {
        self.w.dims()[0]
    }

    /// `p(h|v) = sigmoid(x·Wᵀ + a)` and a sample of the hidden units.
    pub fn sample_h(&self, x: Tensor<B, 2>) -> GibbsSample<B> {
        let wx = x.matmul(self.w.clone().transpose());
        let dims = wx.dims();
        // 배치의 각 행에 bias 더하기
        let activation = wx + self.a.clone().expand(dims);
        let p_h_given_v = sigmoid(activation);

        GibbsSample {
            sample: bernoulli(p_h_given_v.clone()),
            probabilities: p_h_given_v,
        }
    }

    /// `p(v|h) = sigmoid(y·W + b)` and a sample of the visible units.
    pub fn sample_v(&self, y: Tensor<B, 2>) -> GibbsSample<B> {
        let wy = y.matmul(self.w.clone());
        let dims = wy.dims();
        let activation = wy + self.b.clone().expand(dims);
        let p_v_given_h = sigmoid(activation);

        GibbsSample {
            sample: bernoulli(p_v_given_h.clone()),
            probabilities: p_v_given_h,
        }
    }

    /// Contrastive divergence update of `w`, `a` and `b`.
    ///
    /// `v0` are the observed ratings, `vk` the visible nodes after `k`
    /// Gibbs steps, `ph0`/`phk` the hidden probabilities given each.
    pub fn train(
        &mut self,
        v0: Tensor<B, 2>,
        vk: Tensor<B, 2>,
        ph0: Tensor<B, 2>,
        phk: Tensor<B, 2>,
    ) -> Result<()> {
        let [batch, nv] = v0.dims();
        ensure!(
            vk.dims() == [batch, nv],
            "vk shape {:?} does not match v0 shape {:?}",
            vk.dims(),
            v0.dims()
        );
        ensure!(
            nv == self.num_visible(),
            "expected {} visible nodes, got {}",
            self.num_visible(),
            nv
        );
        let hidden = [batch, self.num_hidden()];
        ensure!(
            ph0.dims() == hidden && phk.dims() == hidden,
            "hidden probabilities must be {:?}, got ph0={:?} phk={:?}",
            hidden,
            ph0.dims(),
            phk.dims()
        );

        let positive = v0.clone().transpose().matmul(ph0.clone());
        let negative = vk.clone().transpose().matmul(phk.clone());

        self.w = self.w.clone() + (positive - negative).transpose();
        self.b = self.b.clone() + (v0 - vk).sum_dim(0);
        self.a = self.a.clone() + (ph0 - phk).sum_dim(0);

        tracing::debug!(batch, nv, nh = self.num_hidden(), "contrastive divergence update");
        Ok(())
    }

    /// Runs `k` Gibbs steps from `v0`, returning `vk` and `p(h|vk)`.
    ///
    /// Negative entries of `v0` are unrated and stay fixed across steps.
    pub fn gibbs_chain(&self, v0: Tensor<B, 2>, k: usize) -> (Tensor<B, 2>, Tensor<B, 2>) {
        let unrated = v0.clone().lower_elem(0.0);
        let mut vk = v0.clone();

        for _ in 0..k {
            let hk = self.sample_h(vk).sample;
            vk = self
                .sample_v(hk)
                .sample
                .mask_where(unrated.clone(), v0.clone());
        }

        let phk = self.sample_h(vk.clone()).probabilities;
        (vk, phk)
    }

    /// One CD-k update. Returns the mean absolute error between `v0` and
    /// `vk` over the rated entries (0 if nothing is rated).
    pub fn contrastive_divergence(&mut self, v0: Tensor<B, 2>, k: usize) -> Result<f32> {
        ensure!(k > 0, "contrastive divergence needs at least one Gibbs step");

        let ph0 = self.sample_h(v0.clone()).probabilities;
        let (vk, phk) = self.gibbs_chain(v0.clone(), k);
        self.train(v0.clone(), vk.clone(), ph0, phk)?;

        let rated = v0.clone().greater_equal_elem(0.0).float();
        let count = rated.clone().sum().into_scalar().elem::<f32>();
        if count == 0.0 {
            return Ok(0.0);
        }
        let error = ((v0 - vk).abs() * rated).sum().into_scalar().elem::<f32>() / count;

        tracing::debug!(k, error, "reconstruction error");
        Ok(error)
    }
}

/// Draws 0/1 per element with the given probabilities.
fn bernoulli<B: Backend>(p: Tensor<B, 2>) -> Tensor<B, 2> {
    let uniform = Tensor::<B, 2>::random(p.dims(), Distribution::Default, &p.device());
    uniform.lower(p).float()
}
