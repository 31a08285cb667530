use burn::backend::autodiff;
use burn::backend::wgpu::{Wgpu, WgpuDevice};
use burn::prelude::*;

use super::SaeConfig;

const NB_MOVIES: usize = 8;

/// 평점 행렬을 SAE 에 통과시켜 복원값과 MSE 확인
pub fn example() {
    type BackendF = Wgpu<f32>;
    type AD = autodiff::Autodiff<BackendF>;

    let device = WgpuDevice::default();

    let model = SaeConfig::new(NB_MOVIES).init::<AD>(&device);

    // 사용자 3명 x 영화 8편 (0 = 미평가)
    let ratings = Tensor::<AD, 2>::from_floats(
        [
            [5., 4., 0., 0., 1., 3., 0., 2.],
            [0., 3., 4., 5., 0., 0., 1., 4.],
            [1., 0., 0., 2., 5., 4., 3., 0.],
        ],
        &device,
    );

    let output = model.forward(ratings.clone());
    tracing::info!("입력 shape = {:?}, 출력 shape = {:?}", ratings.shape(), output.shape());

    let loss = model.forward_loss(ratings);
    let loss_value = loss.clone().into_scalar().elem::<f32>();
    let grads = loss.backward();

    tracing::info!("재구성 MSE: {:.6}", loss_value);
    if let Some(grad_fc1) = model.fc1.weight.grad(&grads) {
        tracing::info!("fc1 weight gradient shape = {:?}", grad_fc1.shape());
    }
}
