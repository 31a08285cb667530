use anyhow::Result;
use burn::backend::wgpu::{Wgpu, WgpuDevice};
use burn::prelude::*;

use super::RbmConfig;

const NB_MOVIES: usize = 6;
const NB_HIDDEN: usize = 3;
const CD_STEPS: usize = 10;

/// 사용자 4명의 좋아요(1)/싫어요(0)/미평가(-1) 로 CD-k 한 번 돌려보기
pub fn example() -> Result<()> {
    type BackendF = Wgpu<f32>;

    let device = WgpuDevice::default();
    BackendF::seed(42);

    let mut rbm = RbmConfig::new(NB_MOVIES, NB_HIDDEN).init::<BackendF>(&device);

    let v0 = Tensor::<BackendF, 2>::from_floats(
        [
            [1., 1., 0., -1., 0., 1.],
            [0., -1., 1., 1., -1., 0.],
            [1., 0., -1., 0., 1., 1.],
            [-1., 1., 1., 0., 0., -1.],
        ],
        &device,
    );

    let h = rbm.sample_h(v0.clone());
    tracing::info!("p(h|v0) = {}", h.probabilities);
    tracing::info!("h0 샘플 = {}", h.sample);

    let v = rbm.sample_v(h.sample);
    tracing::info!("p(v|h0) = {}", v.probabilities);

    let error = rbm.contrastive_divergence(v0, CD_STEPS)?;
    tracing::info!("CD-{} 재구성 오차: {:.4}", CD_STEPS, error);
    tracing::info!("학습된 W shape = {:?}", rbm.w.shape());

    Ok(())
}
